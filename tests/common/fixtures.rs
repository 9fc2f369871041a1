//! MEI documents used across the integration tests

/// Every header section the mapper understands
pub const FULL_HEADER: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<mei xmlns="http://www.music-encoding.org/ns/mei" meiversion="5.0">
  <meiHead>
    <fileDesc>
      <titleStmt>
        <title type="main">Mass in B minor</title>
        <title type="subordinate">BWV 232</title>
        <respStmt>
          <persName role="composer"><foreName>Johann Sebastian</foreName><famName>Bach</famName></persName>
          <persName xml:id="ed1" role="editor"><foreName>Anna</foreName><famName>Magdalena</famName></persName>
          <corpName role="funder">Bach-Archiv Leipzig</corpName>
        </respStmt>
      </titleStmt>
      <editionStmt>
        <edition n="2" resp="#ed1">Critical edition</edition>
      </editionStmt>
      <pubStmt>
        <publisher><corpName>Carus &amp; Partner</corpName></publisher>
        <date isodate="2024-03-01">March 2024</date>
        <pubPlace>Stuttgart</pubPlace>
        <identifier type="DOI">10.1234/bwv232</identifier>
      </pubStmt>
      <sourceDesc>
        <source>
          <biblStruct>
            <analytic><title>Autograph score</title></analytic>
            <monogr>
              <title>Mus.ms. Bach P 180</title>
              <imprint><date isodate="1749">c. 1749</date></imprint>
            </monogr>
          </biblStruct>
        </source>
      </sourceDesc>
    </fileDesc>
    <encodingDesc>
      <appInfo>
        <application xml:id="verovio" version="4.1.0" startdate="2024-01-10T09:00:00">
          <name>Verovio</name>
        </application>
      </appInfo>
    </encodingDesc>
    <revisionDesc>
      <change n="1" resp="#ed1" isodate="2024-02-01">
        <changeDesc><p>Initial "diplomatic" encoding</p></changeDesc>
      </change>
      <change resp="#nobody">
        <changeDesc><p>Proofread</p></changeDesc>
      </change>
    </revisionDesc>
  </meiHead>
  <music><body/></music>
</mei>
"##;

/// One title and nothing else
pub const MINIMAL_HEADER: &str = r#"<mei><meiHead><fileDesc><titleStmt><title>Kyrie</title></titleStmt></fileDesc></meiHead></mei>"#;

/// An MEI root without a header
pub const NO_HEADER: &str = r#"<mei><music/></mei>"#;

/// Well-formed, but not MEI
pub const TEI_DOCUMENT: &str = r#"<TEI><teiHeader/></TEI>"#;

/// Not well-formed
pub const TRUNCATED: &str = r#"<mei><meiHead><fileDesc>"#;

//! `<fileDesc>`: titles, responsibility, edition, publication, sources

use super::context::MappingContext;
use crate::graph::{Class, Datatype, Literal, Predicate, Statement};
use crate::ident::slugify;
use crate::tree::TreeNode;
use tracing::debug;

const DEFAULT_TITLE_TYPE: &str = "main";
const DEFAULT_ROLE: &str = "contributor";
const DEFAULT_EDITION_NUMBER: &str = "1";
const DEFAULT_IDENTIFIER_TYPE: &str = "PID";

/// Map the file description. Missing sections are skipped.
pub(crate) fn map_file_desc(file_desc: &TreeNode, ctx: &mut MappingContext) {
    if let Some(stmt) = file_desc.child("titleStmt") {
        map_title_stmt(stmt, ctx);
    }
    if let Some(stmt) = file_desc.child("editionStmt") {
        map_edition_stmt(stmt, ctx);
    }
    if let Some(stmt) = file_desc.child("pubStmt") {
        map_pub_stmt(stmt, ctx);
    }
    if let Some(desc) = file_desc.child("sourceDesc") {
        map_source_desc(desc, ctx);
    }
}

/// Titles become language-tagged literals on the work, tagged with the
/// title's `type`. Responsibility statements target the work.
pub(crate) fn map_title_stmt(stmt: &TreeNode, ctx: &mut MappingContext) {
    let before = ctx.statement_count();
    let work = ctx.work().to_string();

    for title in stmt.children_named("title") {
        let text = title.text_content();
        if text.is_empty() {
            continue;
        }
        let kind = title.attr_non_empty("type").unwrap_or(DEFAULT_TITLE_TYPE);
        ctx.emit(Statement::literal(&work, Predicate::Title, Literal::lang(text, kind)));
    }

    for resp in stmt.children_named("respStmt") {
        map_resp_stmt(resp, &work, ctx);
    }

    debug!(statements = ctx.statement_count() - before, "mapped titleStmt");
}

/// Register the persons and organizations of a `<respStmt>` and link them
/// to `target`.
pub(crate) fn map_resp_stmt(resp: &TreeNode, target: &str, ctx: &mut MappingContext) {
    for person in resp.children_named("persName") {
        map_person(person, target, ctx);
    }
    for corp in resp.children_named("corpName") {
        map_corporation(corp, target, ctx);
    }
}

fn non_empty_child_text(node: &TreeNode, tag: &str) -> Option<String> {
    node.child(tag)
        .map(TreeNode::text_content)
        .filter(|t| !t.is_empty())
}

fn map_person(person: &TreeNode, target: &str, ctx: &mut MappingContext) {
    let given = non_empty_child_text(person, "foreName");
    let family = non_empty_child_text(person, "famName");

    let local_id = match (person.xml_id(), &given, &family) {
        (Some(id), _, _) => id.to_string(),
        (None, Some(given), Some(family)) => {
            format!("agent_{}_{}", slugify(given), slugify(family))
        }
        _ => {
            debug!("persName without xml:id or full name, skipped");
            return;
        }
    };

    let uri = ctx.uri("agent", &local_id);
    let agent = ctx.register_agent(&local_id, uri);

    // Registered either way so `#id` references resolve; described only
    // when both name parts are present.
    let (Some(given), Some(family)) = (given, family) else {
        debug!(id = %local_id, "persName without full name, registered only");
        return;
    };
    let role = person.attr_non_empty("role").unwrap_or(DEFAULT_ROLE);

    ctx.emit(Statement::typed_as(&agent, Class::Person));
    ctx.emit(Statement::literal(&agent, Predicate::GivenName, Literal::plain(given)));
    ctx.emit(Statement::literal(&agent, Predicate::FamilyName, Literal::plain(family)));
    ctx.emit(Statement::link(target, Predicate::Creator, &agent));
    ctx.emit(Statement::literal(&agent, Predicate::HadRole, Literal::plain(role)));
}

fn map_corporation(corp: &TreeNode, target: &str, ctx: &mut MappingContext) {
    let name = corp.text_content();

    let local_id = match corp.xml_id() {
        Some(id) => id.to_string(),
        None if !name.is_empty() => format!("org_{}", slugify(&name)),
        None => {
            debug!("corpName without xml:id or name, skipped");
            return;
        }
    };

    let uri = ctx.uri("organization", &local_id);
    let org = ctx.register_agent(&local_id, uri);

    if name.is_empty() {
        debug!(id = %local_id, "corpName without name, registered only");
        return;
    }
    let role = corp.attr_non_empty("role").unwrap_or(DEFAULT_ROLE);

    ctx.emit(Statement::typed_as(&org, Class::Organization));
    ctx.emit(Statement::literal(&org, Predicate::Name, Literal::plain(name)));
    ctx.emit(Statement::link(target, Predicate::Contributor, &org));
    ctx.emit(Statement::literal(&org, Predicate::HadRole, Literal::plain(role)));
}

/// Each non-empty `<edition>` describes the edition entity. A `resp`
/// reference only links if its agent was registered earlier in the walk.
pub(crate) fn map_edition_stmt(stmt: &TreeNode, ctx: &mut MappingContext) {
    let before = ctx.statement_count();
    let work = ctx.work().to_string();
    let edition_uri = ctx.edition().to_string();

    for edition in stmt.children_named("edition") {
        let text = edition.text_content();
        if text.is_empty() {
            continue;
        }
        let number = edition.attr_non_empty("n").unwrap_or(DEFAULT_EDITION_NUMBER);

        ctx.emit(Statement::typed_as(&edition_uri, Class::Document));
        ctx.emit(Statement::literal(&edition_uri, Predicate::Description, Literal::plain(text)));
        ctx.emit(Statement::literal(
            &edition_uri,
            Predicate::EditionNumber,
            Literal::plain(number),
        ));
        ctx.emit(Statement::link(&work, Predicate::Edition, &edition_uri));

        match edition.attr("resp").map(|r| (r, ctx.resolve_agent(r))) {
            Some((_, Some(agent))) => {
                ctx.emit(Statement::link(&edition_uri, Predicate::Creator, agent));
            }
            Some((reference, None)) => {
                debug!(reference, "edition resp not resolved, link omitted");
            }
            None => {}
        }
    }

    debug!(statements = ctx.statement_count() - before, "mapped editionStmt");
}

/// Publisher, issue date, place and identifier of the work.
pub(crate) fn map_pub_stmt(stmt: &TreeNode, ctx: &mut MappingContext) {
    let before = ctx.statement_count();
    let work = ctx.work().to_string();

    if let Some(corp) = stmt.child("publisher").and_then(|p| p.child("corpName")) {
        let name = corp.text_content();
        if !name.is_empty() {
            let local_id = format!("publisher_{}", slugify(&name));
            let uri = ctx.uri("organization", &local_id);
            let publisher = ctx.register_agent(&local_id, uri);

            ctx.emit(Statement::typed_as(&publisher, Class::Organization));
            ctx.emit(Statement::literal(&publisher, Predicate::Name, Literal::plain(name)));
            ctx.emit(Statement::link(&work, Predicate::Publisher, &publisher));
        }
    }

    if let Some(date) = stmt.child("date") {
        if let Some(literal) = date_literal(date, Datatype::Date) {
            ctx.emit(Statement::literal(&work, Predicate::Issued, literal));
        }
    }

    if let Some(place) = stmt.child("pubPlace") {
        let text = place.text_content();
        if !text.is_empty() {
            ctx.emit(Statement::literal(&work, Predicate::Spatial, Literal::plain(text)));
        }
    }

    if let Some(identifier) = stmt.child("identifier") {
        let text = identifier.text_content();
        if !text.is_empty() {
            let kind = identifier.attr_non_empty("type").unwrap_or(DEFAULT_IDENTIFIER_TYPE);
            ctx.emit(Statement::literal(&work, Predicate::Identifier, Literal::plain(text)));
            ctx.emit(Statement::literal(&work, Predicate::IdentifierType, Literal::plain(kind)));
        }
    }

    debug!(statements = ctx.statement_count() - before, "mapped pubStmt");
}

/// A `<date>` as a literal: typed when `isodate` is present, otherwise its
/// plain text. `None` when it has neither.
fn date_literal(date: &TreeNode, datatype: Datatype) -> Option<Literal> {
    if let Some(iso) = date.attr_non_empty("isodate") {
        return Some(Literal::typed(iso, datatype));
    }
    let text = date.text_content();
    (!text.is_empty()).then(|| Literal::plain(text))
}

/// One `source_N` document per `<source>`, numbered from 1.
pub(crate) fn map_source_desc(desc: &TreeNode, ctx: &mut MappingContext) {
    let before = ctx.statement_count();
    let work = ctx.work().to_string();

    for (i, source) in desc.children_named("source").enumerate() {
        let source_uri = ctx.register_source(i + 1);

        ctx.emit(Statement::typed_as(&source_uri, Class::Document));
        ctx.emit(Statement::link(&work, Predicate::Source, &source_uri));

        if let Some(bibl) = source.child("biblStruct") {
            map_bibl_struct(bibl, &source_uri, ctx);
        }
    }

    debug!(statements = ctx.statement_count() - before, "mapped sourceDesc");
}

fn map_bibl_struct(bibl: &TreeNode, source_uri: &str, ctx: &mut MappingContext) {
    if let Some(analytic) = bibl.child("analytic") {
        if let Some(title) = non_empty_child_text(analytic, "title") {
            ctx.emit(Statement::literal(source_uri, Predicate::Title, Literal::plain(title)));
        }
        for resp in analytic.children_named("respStmt") {
            map_resp_stmt(resp, source_uri, ctx);
        }
    }

    if let Some(monogr) = bibl.child("monogr") {
        if let Some(title) = non_empty_child_text(monogr, "title") {
            ctx.emit(Statement::literal(source_uri, Predicate::IsPartOf, Literal::plain(title)));
        }
        for resp in monogr.children_named("respStmt") {
            map_resp_stmt(resp, source_uri, ctx);
        }
        if let Some(date) = monogr.child("imprint").and_then(|i| i.child("date")) {
            if let Some(literal) = date_literal(date, Datatype::GYear) {
                ctx.emit(Statement::literal(source_uri, Predicate::Created, literal));
            }
        }
    }
}

//! `<revisionDesc>`: change history as activities

use super::context::MappingContext;
use crate::graph::{Class, Datatype, Literal, Predicate, Statement};
use crate::tree::TreeNode;
use tracing::debug;

/// Each `<change>` becomes a revision activity that generated the file.
/// The activity is typed whether or not the change has a description.
///
/// The change's `resp` only yields an association when it names an agent
/// already registered by the file description.
pub(crate) fn map_revision_desc(desc: &TreeNode, ctx: &mut MappingContext) {
    let before = ctx.statement_count();
    let file = ctx.file().to_string();

    for (i, change) in desc.children_named("change").enumerate() {
        let change_id = change
            .attr_non_empty("n")
            .map(str::to_string)
            .unwrap_or_else(|| format!("change_{}", i + 1));
        let activity_id = format!("revision_{}", change_id);
        let uri = ctx.uri("activity", &activity_id);
        let activity = ctx.register_activity(&activity_id, uri);

        ctx.emit(Statement::typed_as(&activity, Class::Activity));

        let description = change
            .child("changeDesc")
            .and_then(|d| d.child("p"))
            .map(TreeNode::text_content)
            .filter(|t| !t.is_empty());
        if let Some(text) = description {
            ctx.emit(Statement::literal(&activity, Predicate::Description, Literal::plain(text)));
        }

        if let Some(agent) = change.attr("resp").and_then(|r| ctx.resolve_agent(r)) {
            ctx.emit(Statement::link(&activity, Predicate::WasAssociatedWith, agent));
        }

        if let Some(date) = change.attr_non_empty("isodate") {
            ctx.emit(Statement::literal(
                &activity,
                Predicate::EndedAtTime,
                Literal::typed(date, Datatype::Date),
            ));
        }

        ctx.emit(Statement::link(&activity, Predicate::Generated, &file));
    }

    debug!(statements = ctx.statement_count() - before, "mapped revisionDesc");
}

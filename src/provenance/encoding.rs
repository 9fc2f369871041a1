//! `<encodingDesc>`: encoding software and the activities it performed

use super::context::MappingContext;
use crate::graph::{Class, Datatype, Literal, Predicate, Statement};
use crate::tree::TreeNode;
use tracing::debug;

pub(crate) fn map_encoding_desc(desc: &TreeNode, ctx: &mut MappingContext) {
    if let Some(app_info) = desc.child("appInfo") {
        map_app_info(app_info, ctx);
    }
}

/// Each `<application>` becomes a software agent plus an encoding activity
/// that used the work and generated the file. Applications without an
/// `xml:id` are numbered `app_1`, `app_2`, ... by position.
pub(crate) fn map_app_info(app_info: &TreeNode, ctx: &mut MappingContext) {
    let before = ctx.statement_count();
    let work = ctx.work().to_string();
    let file = ctx.file().to_string();

    for (i, app) in app_info.children_named("application").enumerate() {
        let app_id = app
            .xml_id()
            .map(str::to_string)
            .unwrap_or_else(|| format!("app_{}", i + 1));
        let software = ctx.uri("software", &app_id);
        let started = app.attr_non_empty("startdate");
        let ended = app.attr_non_empty("enddate");

        ctx.emit(Statement::typed_as(&software, Class::SoftwareAgent));
        if let Some(name) = app.child("name").map(TreeNode::text_content) {
            if !name.is_empty() {
                ctx.emit(Statement::literal(&software, Predicate::Name, Literal::plain(name)));
            }
        }
        if let Some(version) = app.attr_non_empty("version") {
            ctx.emit(Statement::literal(&software, Predicate::Version, Literal::plain(version)));
        }
        emit_timestamps(&software, started, ended, ctx);

        let activity_id = format!("encoding_{}", app_id);
        let uri = ctx.uri("activity", &activity_id);
        let activity = ctx.register_activity(&activity_id, uri);

        ctx.emit(Statement::typed_as(&activity, Class::Activity));
        ctx.emit(Statement::link(&activity, Predicate::WasAssociatedWith, &software));
        ctx.emit(Statement::link(&activity, Predicate::Used, &work));
        ctx.emit(Statement::link(&activity, Predicate::Generated, &file));
        emit_timestamps(&activity, started, ended, ctx);
    }

    debug!(statements = ctx.statement_count() - before, "mapped appInfo");
}

fn emit_timestamps(
    subject: &str,
    started: Option<&str>,
    ended: Option<&str>,
    ctx: &mut MappingContext,
) {
    if let Some(start) = started {
        ctx.emit(Statement::literal(
            subject,
            Predicate::StartedAtTime,
            Literal::typed(start, Datatype::DateTime),
        ));
    }
    if let Some(end) = ended {
        ctx.emit(Statement::literal(
            subject,
            Predicate::EndedAtTime,
            Literal::typed(end, Datatype::DateTime),
        ));
    }
}

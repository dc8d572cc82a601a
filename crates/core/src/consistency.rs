//! Snapshot-based consistency checks for writes.
//!
//! These functions decide constraint violations that require knowledge of the
//! current dataset. They operate on rows the caller has already fetched, so
//! the caller controls exactly when the snapshot is taken; the storage-level
//! constraints remain the backstop for writes racing between snapshot and
//! commit.

use crate::types::DbId;

/// True when a project other than `exclude_id` already uses `name`.
///
/// `projects` yields `(id, name)` pairs from the current snapshot.
/// `exclude_id` is `None` on create and the target's id on update, so a
/// record is never compared against itself.
pub fn project_name_taken<'a, I>(projects: I, name: &str, exclude_id: Option<DbId>) -> bool
where
    I: IntoIterator<Item = (DbId, &'a str)>,
{
    projects
        .into_iter()
        .any(|(id, existing)| Some(id) != exclude_id && existing == name)
}

/// True when another action in the same project already uses `description`.
///
/// `actions` yields `(id, project_id, description)` triples from the current
/// snapshot. Uniqueness is scoped to `project_id`: two actions in different
/// projects may share a description, two in the same project may not.
pub fn action_description_taken<'a, I>(
    actions: I,
    project_id: DbId,
    description: &str,
    exclude_id: Option<DbId>,
) -> bool
where
    I: IntoIterator<Item = (DbId, DbId, &'a str)>,
{
    actions.into_iter().any(|(id, parent, existing)| {
        Some(id) != exclude_id && parent == project_id && existing == description
    })
}

/// True when `project_id` appears among the current project ids. Actions
/// must reference a live project at write time; projects carry no foreign
/// keys of their own.
pub fn project_exists<I>(project_ids: I, project_id: DbId) -> bool
where
    I: IntoIterator<Item = DbId>,
{
    project_ids.into_iter().any(|id| id == project_id)
}

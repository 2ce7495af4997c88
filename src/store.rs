//! Global Application State Store
//!
//! Entity collections with field-level reactivity via reactive_stores.
//! CRUD results patch these lists in place; nothing here survives a page
//! reload, the server owns the data.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Portfolio, Project, Role, Team, User, Worklog};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub roles: Vec<Role>,
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub projects: Vec<Project>,
    pub portfolios: Vec<Portfolio>,
    pub worklogs: Vec<Worklog>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Collection Helpers
// ========================
//
// Pure list operations so the patch-in-place semantics are testable;
// the store wrappers below just apply them under a write guard.

/// Replace the entity with the same id, or append when it is new
pub fn upsert_by_id<T>(list: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> u32) {
    match list.iter_mut().find(|existing| id_of(existing) == id_of(&item)) {
        Some(existing) => *existing = item,
        None => list.push(item),
    }
}

/// Remove the entity with the given id; everything else stays
pub fn remove_by_id<T>(list: &mut Vec<T>, id: u32, id_of: impl Fn(&T) -> u32) {
    list.retain(|existing| id_of(existing) != id);
}

pub fn store_upsert_role(store: &AppStore, role: Role) {
    upsert_by_id(&mut store.roles().write(), role, |r| r.id);
}

pub fn store_remove_role(store: &AppStore, id: u32) {
    remove_by_id(&mut store.roles().write(), id, |r| r.id);
}

pub fn store_upsert_user(store: &AppStore, user: User) {
    upsert_by_id(&mut store.users().write(), user, |u| u.id);
}

pub fn store_remove_user(store: &AppStore, id: u32) {
    remove_by_id(&mut store.users().write(), id, |u| u.id);
}

pub fn store_upsert_team(store: &AppStore, team: Team) {
    upsert_by_id(&mut store.teams().write(), team, |t| t.id);
}

pub fn store_remove_team(store: &AppStore, id: u32) {
    remove_by_id(&mut store.teams().write(), id, |t| t.id);
}

pub fn store_upsert_project(store: &AppStore, project: Project) {
    upsert_by_id(&mut store.projects().write(), project, |p| p.id);
}

pub fn store_remove_project(store: &AppStore, id: u32) {
    remove_by_id(&mut store.projects().write(), id, |p| p.id);
}

pub fn store_upsert_portfolio(store: &AppStore, portfolio: Portfolio) {
    upsert_by_id(&mut store.portfolios().write(), portfolio, |p| p.id);
}

pub fn store_remove_portfolio(store: &AppStore, id: u32) {
    remove_by_id(&mut store.portfolios().write(), id, |p| p.id);
}

pub fn store_upsert_worklog(store: &AppStore, worklog: Worklog) {
    upsert_by_id(&mut store.worklogs().write(), worklog, |w| w.id);
}

pub fn store_remove_worklog(store: &AppStore, id: u32) {
    remove_by_id(&mut store.worklogs().write(), id, |w| w.id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: u32, name: &str) -> Role {
        Role {
            id,
            name: name.into(),
            description: String::new(),
            permissions: Vec::new(),
        }
    }

    #[test]
    fn remove_takes_exactly_one_row() {
        let mut roles = vec![role(1, "admin"), role(2, "manager"), role(3, "viewer")];
        remove_by_id(&mut roles, 2, |r| r.id);
        assert_eq!(roles.len(), 2);
        assert!(roles.iter().all(|r| r.id != 2));
        // removing an id that is gone changes nothing
        remove_by_id(&mut roles, 2, |r| r.id);
        assert_eq!(roles.len(), 2);
    }

    #[test]
    fn upsert_replaces_in_place_without_duplicating() {
        let mut roles = vec![role(1, "admin"), role(2, "manager")];
        upsert_by_id(&mut roles, role(2, "team lead"), |r| r.id);
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[1].name, "team lead");

        upsert_by_id(&mut roles, role(9, "auditor"), |r| r.id);
        assert_eq!(roles.len(), 3);
        assert_eq!(roles[2].id, 9);
    }
}

// The provided `create` and `update` methods are shared by every backend, so
// they are checked here against a throwaway in-memory store.

use std::cell::RefCell;

use deptrec_core::errors::{ExErrorKind, MapperError, Result};
use deptrec_core::{Department, DepartmentRepository};

#[derive(Default)]
struct MemoryStore {
    rows: RefCell<Vec<(i64, String, String)>>,
    next_id: RefCell<i64>,
    saves: RefCell<usize>,
}

struct MemoryRepo;

impl DepartmentRepository for MemoryRepo {
    type Store<'s> = MemoryStore;

    fn save(store: &MemoryStore, department: &mut Department) -> Result<()> {
        *store.saves.borrow_mut() += 1;
        let mut rows = store.rows.borrow_mut();
        match department.id {
            None => {
                let mut next_id = store.next_id.borrow_mut();
                *next_id += 1;
                rows.push((*next_id, department.name.clone(), department.location.clone()));
                department.id = Some(*next_id);
            }
            Some(id) => {
                for row in rows.iter_mut().filter(|row| row.0 == id) {
                    row.1 = department.name.clone();
                    row.2 = department.location.clone();
                }
            }
        }
        Ok(())
    }

    fn delete(store: &MemoryStore, department: &mut Department) -> Result<()> {
        let id = department
            .id
            .ok_or(MapperError::NotPersisted { op: "delete" })?;
        let mut rows = store.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|row| row.0 != id);
        if rows.len() == before {
            return Err(MapperError::RowNotFound { id }.into());
        }
        department.id = None;
        Ok(())
    }

    fn get_all(store: &MemoryStore) -> Result<Vec<Department>> {
        Ok(store
            .rows
            .borrow()
            .iter()
            .cloned()
            .map(Department::from_row)
            .collect())
    }

    fn find_by_id(store: &MemoryStore, id: i64) -> Result<Option<Department>> {
        Ok(Self::get_all(store)?.into_iter().find(|d| d.id == Some(id)))
    }

    fn find_by_name(store: &MemoryStore, name: &str) -> Result<Option<Department>> {
        Ok(Self::get_all(store)?.into_iter().find(|d| d.name == name))
    }
}

#[test]
fn test_create_saves_and_returns_persisted() {
    let store = MemoryStore::default();

    let dept = MemoryRepo::create(&store, "Engineering", "Building A").unwrap();

    assert_eq!(dept.id, Some(1));
    assert_eq!(*store.saves.borrow(), 1);
    assert_eq!(
        MemoryRepo::find_by_id(&store, 1).unwrap(),
        Some(Department::with_id(1, "Engineering", "Building A"))
    );
}

#[test]
fn test_update_unsaved_is_invalid_state_and_skips_save() {
    let store = MemoryStore::default();
    let mut dept = Department::new("Engineering", "Building A");

    let err = MemoryRepo::update(&store, &mut dept).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidState);
    assert_eq!(err.op(), Some("update"));
    assert_eq!(*store.saves.borrow(), 0);
    assert!(store.rows.borrow().is_empty());
}

#[test]
fn test_update_persisted_delegates_to_save() {
    let store = MemoryStore::default();
    let mut dept = MemoryRepo::create(&store, "Engineering", "Building A").unwrap();

    dept.location = "Building B".to_string();
    MemoryRepo::update(&store, &mut dept).unwrap();

    assert_eq!(*store.saves.borrow(), 2);
    let found = MemoryRepo::find_by_id(&store, 1).unwrap().unwrap();
    assert_eq!(found.location, "Building B");
}

// For any name and location, a created department is found again by its id.

use deptrec_core::{DepartmentRepository, DepartmentSchema};
use deptrec_store::{SqliteDepartmentRepo as Repo, SqliteDepartmentSchema as Schema, StoreContext};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_created_department_is_found_by_id(name in "\\PC*", location in "\\PC*") {
        let conn = deptrec_store::db::open_in_memory().unwrap();
        let ctx = StoreContext::autocommit(&conn);
        Schema::create_table(&ctx).unwrap();

        let dept = Repo::create(&ctx, &name, &location).unwrap();
        let id = dept.id;
        prop_assert!(id.is_some());

        let found = Repo::find_by_id(&ctx, id.unwrap()).unwrap().unwrap();
        prop_assert_eq!(found.name, name);
        prop_assert_eq!(found.location, location);
    }
}

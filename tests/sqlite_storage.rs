#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskflow::db::db::Db;
    use taskflow::db::storage::SqliteStorage;
    use taskflow::libs::storage::{Storage, TASKS_KEY};
    use taskflow::libs::store::TaskStore;
    use taskflow::libs::task::Priority;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SqliteTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for SqliteTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("taskflow.db");
            SqliteTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    impl SqliteTestContext {
        fn open(&self) -> TaskStore<SqliteStorage> {
            let storage = SqliteStorage::from_db(Db::open(&self.db_path).unwrap()).unwrap();
            TaskStore::load(storage)
        }
    }

    #[test_context(SqliteTestContext)]
    #[test]
    fn test_tasks_survive_reopen(ctx: &mut SqliteTestContext) {
        let id = {
            let mut store = ctx.open();
            store.add("Buy milk", Some("personal"), Some(Priority::High)).unwrap();
            let id = store.add("Walk dog", None, None).unwrap().id.clone();
            store.toggle(&id).unwrap();
            assert!(store.take_persist_error().is_none());
            id
        };

        let store = ctx.open();
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].id, id);
        assert!(store.tasks()[0].completed);
        assert_eq!(store.tasks()[1].text, "Buy milk");
        assert_eq!(store.tasks()[1].category, "personal");
        assert_eq!(store.tasks()[1].priority, Priority::High);
    }

    #[test_context(SqliteTestContext)]
    #[test]
    fn test_theme_survives_reopen(ctx: &mut SqliteTestContext) {
        {
            let mut store = ctx.open();
            assert!(!store.dark_mode());
            store.toggle_dark_mode();
        }
        assert!(ctx.open().dark_mode());
    }

    #[test_context(SqliteTestContext)]
    #[test]
    fn test_stored_json_uses_camel_case(ctx: &mut SqliteTestContext) {
        let mut store = ctx.open();
        store.add("Check format", None, None).unwrap();

        let raw = store.storage().get(TASKS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value[0];

        assert!(record["createdAt"].is_string());
        assert_eq!(record["text"], "Check format");
        assert_eq!(record["completed"], false);
        assert_eq!(record["category"], "other");
        assert_eq!(record["priority"], "medium");
    }

    #[test_context(SqliteTestContext)]
    #[test]
    fn test_corrupt_value_loads_empty(ctx: &mut SqliteTestContext) {
        {
            let mut storage = SqliteStorage::from_db(Db::open(&ctx.db_path).unwrap()).unwrap();
            storage.set(TASKS_KEY, "not json at all").unwrap();
        }

        let mut store = ctx.open();
        assert!(store.is_empty());

        // The next write replaces the corrupt value
        store.add("Fresh start", None, None).unwrap();
        assert_eq!(ctx.open().len(), 1);
    }
}

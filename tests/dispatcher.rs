#[cfg(test)]
mod tests {
    use taskflow::libs::config::DefaultsConfig;
    use taskflow::libs::dispatcher::{Dispatcher, EditState, EmptyState, Intent, Notification, Severity};
    use taskflow::libs::error::{TaskError, TaskResult};
    use taskflow::libs::messages::Message;
    use taskflow::libs::storage::{MemoryStorage, Storage};
    use taskflow::libs::store::TaskStore;
    use taskflow::libs::task::{Priority, SortOrder, TaskFilter};
    use test_context::{test_context, TestContext};

    struct DispatcherTestContext {
        session: Dispatcher<MemoryStorage>,
    }

    impl TestContext for DispatcherTestContext {
        fn setup() -> Self {
            DispatcherTestContext {
                session: Dispatcher::new(TaskStore::load(MemoryStorage::new())),
            }
        }
    }

    fn add(text: &str) -> Intent {
        Intent::Add {
            text: text.to_string(),
            category: None,
            priority: None,
        }
    }

    fn id_of(session: &Dispatcher<MemoryStorage>, text: &str) -> String {
        session.store().tasks().iter().find(|t| t.text == text).map(|t| t.id.clone()).unwrap()
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_add_then_filter_active(ctx: &mut DispatcherTestContext) {
        let notification = ctx.session.dispatch(add("Buy milk"));
        assert_eq!(notification, Some(Notification::success(Message::TaskAdded)));

        ctx.session.dispatch(Intent::SetFilter(TaskFilter::Active));
        let render = ctx.session.render();

        assert_eq!(render.tasks.len(), 1);
        assert_eq!(render.tasks[0].text, "Buy milk");
        assert!(!render.tasks[0].completed);
        assert_eq!(render.stats.total, 1);
        assert_eq!(render.stats.active, 1);
        assert_eq!(render.stats.completed, 0);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_toggle_moves_task_between_filters(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("Task X"));
        let id = id_of(&ctx.session, "Task X");

        let notification = ctx.session.dispatch(Intent::Toggle(id.clone()));
        assert_eq!(notification, Some(Notification::success(Message::TaskCompleted)));

        ctx.session.dispatch(Intent::SetFilter(TaskFilter::Completed));
        assert_eq!(ctx.session.render().tasks.len(), 1);
        ctx.session.dispatch(Intent::SetFilter(TaskFilter::Active));
        assert_eq!(ctx.session.render().empty_state, Some(EmptyState::NoMatches));

        let notification = ctx.session.dispatch(Intent::Toggle(id));
        assert_eq!(notification, Some(Notification::success(Message::TaskMarkedActive)));
        assert_eq!(ctx.session.render().tasks.len(), 1);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_blank_add_warns_and_keeps_state(ctx: &mut DispatcherTestContext) {
        for text in ["", "   "] {
            let notification = ctx.session.dispatch(add(text));
            assert_eq!(notification, Some(Notification::warning(Message::TaskTextRequired)));
        }
        assert!(ctx.session.store().is_empty());
        assert_eq!(ctx.session.render().empty_state, Some(EmptyState::NoTasks));
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_sort_cycles_and_orders_by_creation(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("A"));
        ctx.session.dispatch(add("B"));

        let texts = |s: &Dispatcher<MemoryStorage>| s.render().tasks.iter().map(|t| t.text.clone()).collect::<Vec<_>>();
        assert_eq!(texts(&ctx.session), vec!["B", "A"]);

        let notification = ctx.session.dispatch(Intent::CycleSort);
        assert_eq!(notification, Some(Notification::success(Message::SortedBy(SortOrder::Oldest))));
        assert_eq!(texts(&ctx.session), vec!["A", "B"]);

        ctx.session.dispatch(Intent::CycleSort);
        assert_eq!(ctx.session.params().sort, SortOrder::Alphabetical);
        ctx.session.dispatch(Intent::CycleSort);
        assert_eq!(ctx.session.params().sort, SortOrder::Newest);
        assert_eq!(texts(&ctx.session), vec!["B", "A"]);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_search_and_empty_states(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("Buy milk"));
        ctx.session.dispatch(add("Walk dog"));

        assert_eq!(ctx.session.dispatch(Intent::SetSearch("  MILK ".to_string())), None);
        assert_eq!(ctx.session.params().search, "milk");
        let render = ctx.session.render();
        assert_eq!(render.tasks.len(), 1);
        assert_eq!(render.stats.total, 2);

        ctx.session.dispatch(Intent::SetSearch("cheese".to_string()));
        assert_eq!(ctx.session.render().empty_state, Some(EmptyState::NoMatches));

        ctx.session.dispatch(Intent::SetSearch(String::new()));
        assert_eq!(ctx.session.render().tasks.len(), 2);
        assert_eq!(ctx.session.render().empty_state, None);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_clear_completed(ctx: &mut DispatcherTestContext) {
        let notification = ctx.session.dispatch(Intent::ClearCompleted);
        assert_eq!(notification, Some(Notification::warning(Message::NoCompletedTasks)));

        ctx.session.dispatch(add("Done one"));
        ctx.session.dispatch(add("Open one"));
        let id = id_of(&ctx.session, "Done one");
        ctx.session.dispatch(Intent::Toggle(id));

        let notification = ctx.session.dispatch(Intent::ClearCompleted);
        assert_eq!(notification, Some(Notification::success(Message::CompletedTasksCleared(1))));
        assert_eq!(ctx.session.render().stats.completed, 0);
        assert_eq!(ctx.session.store().len(), 1);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_clear_all_requires_confirmation(ctx: &mut DispatcherTestContext) {
        let notification = ctx.session.dispatch(Intent::ClearAll { confirmed: true });
        assert_eq!(notification, Some(Notification::warning(Message::NoTasksToClear)));

        ctx.session.dispatch(add("One"));
        ctx.session.dispatch(add("Two"));

        assert_eq!(ctx.session.dispatch(Intent::ClearAll { confirmed: false }), None);
        assert_eq!(ctx.session.store().len(), 2);

        let notification = ctx.session.dispatch(Intent::ClearAll { confirmed: true });
        assert_eq!(notification, Some(Notification::success(Message::AllTasksCleared)));
        assert!(ctx.session.store().is_empty());
        assert_eq!(ctx.session.store().storage().get("tasks").unwrap(), Some("[]".to_string()));
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_edit_commit_and_cancel(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("Original"));
        let id = id_of(&ctx.session, "Original");

        assert_eq!(ctx.session.dispatch(Intent::StartEdit(id.clone())), None);
        assert_eq!(
            *ctx.session.edit_state(),
            EditState::Editing {
                id: id.clone(),
                draft: "Original".to_string()
            }
        );

        ctx.session.dispatch(Intent::EditDraft("Draft text".to_string()));
        assert_eq!(ctx.session.dispatch(Intent::CancelEdit), None);
        assert_eq!(*ctx.session.edit_state(), EditState::Idle);
        assert_eq!(ctx.session.store().get(&id).unwrap().text, "Original");

        ctx.session.dispatch(Intent::StartEdit(id.clone()));
        let notification = ctx.session.dispatch(Intent::CommitEdit {
            id: id.clone(),
            text: "Renamed".to_string(),
        });
        assert_eq!(notification, Some(Notification::success(Message::TaskUpdated)));
        assert_eq!(*ctx.session.edit_state(), EditState::Idle);
        assert_eq!(ctx.session.store().get(&id).unwrap().text, "Renamed");
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_commit_edit_edge_cases(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("Keep me"));
        let id = id_of(&ctx.session, "Keep me");

        ctx.session.dispatch(Intent::StartEdit(id.clone()));
        let notification = ctx.session.dispatch(Intent::CommitEdit {
            id: id.clone(),
            text: "  ".to_string(),
        });
        assert_eq!(notification, Some(Notification::warning(Message::TaskTextRequired)));
        assert_eq!(ctx.session.store().get(&id).unwrap().text, "Keep me");

        let notification = ctx.session.dispatch(Intent::CommitEdit {
            id: id.clone(),
            text: " Keep me ".to_string(),
        });
        assert_eq!(notification, None);
        assert_eq!(*ctx.session.edit_state(), EditState::Idle);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_start_edit_on_other_task_commits_draft(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("First"));
        ctx.session.dispatch(add("Second"));
        let first = id_of(&ctx.session, "First");
        let second = id_of(&ctx.session, "Second");

        ctx.session.dispatch(Intent::StartEdit(first.clone()));
        ctx.session.dispatch(Intent::EditDraft("First edited".to_string()));

        let notification = ctx.session.dispatch(Intent::StartEdit(second.clone()));
        assert_eq!(notification, Some(Notification::success(Message::TaskUpdated)));
        assert_eq!(ctx.session.store().get(&first).unwrap().text, "First edited");
        assert_eq!(
            *ctx.session.edit_state(),
            EditState::Editing {
                id: second,
                draft: "Second".to_string()
            }
        );
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_commit_on_other_task_keeps_open_draft(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("A"));
        ctx.session.dispatch(add("B"));
        let a = id_of(&ctx.session, "A");
        let b = id_of(&ctx.session, "B");

        ctx.session.dispatch(Intent::StartEdit(a.clone()));
        ctx.session.dispatch(Intent::EditDraft("A edited".to_string()));

        let notification = ctx.session.dispatch(Intent::CommitEdit {
            id: b.clone(),
            text: "B edited".to_string(),
        });
        assert_eq!(notification, Some(Notification::success(Message::TaskUpdated)));
        assert_eq!(ctx.session.store().get(&a).unwrap().text, "A edited");
        assert_eq!(ctx.session.store().get(&b).unwrap().text, "B edited");
        assert_eq!(*ctx.session.edit_state(), EditState::Idle);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_implicit_commit_drops_empty_draft(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("First"));
        ctx.session.dispatch(add("Second"));
        let first = id_of(&ctx.session, "First");
        let second = id_of(&ctx.session, "Second");

        ctx.session.dispatch(Intent::StartEdit(first.clone()));
        ctx.session.dispatch(Intent::EditDraft(String::new()));

        assert_eq!(ctx.session.dispatch(Intent::StartEdit(second.clone())), None);
        assert_eq!(ctx.session.store().get(&first).unwrap().text, "First");
        assert!(matches!(ctx.session.edit_state(), EditState::Editing { id, .. } if *id == second));
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_start_edit_on_same_task_saves(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("Typo teh"));
        let id = id_of(&ctx.session, "Typo teh");

        ctx.session.dispatch(Intent::StartEdit(id.clone()));
        ctx.session.dispatch(Intent::EditDraft("Typo the".to_string()));

        let notification = ctx.session.dispatch(Intent::StartEdit(id.clone()));
        assert_eq!(notification, Some(Notification::success(Message::TaskUpdated)));
        assert_eq!(*ctx.session.edit_state(), EditState::Idle);
        assert_eq!(ctx.session.store().get(&id).unwrap().text, "Typo the");
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_draft_without_edit_is_ignored(ctx: &mut DispatcherTestContext) {
        assert_eq!(ctx.session.dispatch(Intent::EditDraft("stray".to_string())), None);
        assert_eq!(*ctx.session.edit_state(), EditState::Idle);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_delete_ends_edit_of_deleted_task(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("Doomed"));
        let id = id_of(&ctx.session, "Doomed");

        ctx.session.dispatch(Intent::StartEdit(id.clone()));
        let notification = ctx.session.dispatch(Intent::Delete(id.clone()));
        assert_eq!(notification, Some(Notification::success(Message::TaskDeleted)));
        assert_eq!(*ctx.session.edit_state(), EditState::Idle);
        assert!(ctx.session.store().is_empty());
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_stale_ids_are_silent(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(add("Present"));

        assert_eq!(ctx.session.dispatch(Intent::Toggle("gone".to_string())), None);
        assert_eq!(ctx.session.dispatch(Intent::Delete("gone".to_string())), None);
        assert_eq!(ctx.session.dispatch(Intent::StartEdit("gone".to_string())), None);
        assert_eq!(*ctx.session.edit_state(), EditState::Idle);
        assert_eq!(
            ctx.session.dispatch(Intent::CommitEdit {
                id: "gone".to_string(),
                text: "Text".to_string()
            }),
            None
        );
        assert_eq!(ctx.session.store().len(), 1);
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_theme_toggle_persists(ctx: &mut DispatcherTestContext) {
        let notification = ctx.session.dispatch(Intent::ToggleTheme);
        assert_eq!(notification, Some(Notification::success(Message::ThemeEnabled { dark: true })));
        assert!(ctx.session.render().dark_mode);

        let reloaded = TaskStore::load(ctx.session.store().storage().clone());
        assert!(reloaded.dark_mode());

        let notification = ctx.session.dispatch(Intent::ToggleTheme);
        assert_eq!(notification, Some(Notification::success(Message::ThemeEnabled { dark: false })));
    }

    #[test_context(DispatcherTestContext)]
    #[test]
    fn test_details(ctx: &mut DispatcherTestContext) {
        ctx.session.dispatch(Intent::Add {
            text: "Plan trip".to_string(),
            category: Some("personal".to_string()),
            priority: Some(Priority::High),
        });
        let id = id_of(&ctx.session, "Plan trip");

        let details = ctx.session.details(&id).unwrap();
        assert_eq!(details.text, "Plan trip");
        assert_eq!(details.status, "Active");
        assert_eq!(details.category, "Personal");
        assert_eq!(details.priority, "High");
        assert!(ctx.session.details("gone").is_none());
    }

    #[test]
    fn test_configured_defaults_apply_to_new_tasks() {
        let mut session = Dispatcher::new(TaskStore::load(MemoryStorage::new())).with_defaults(DefaultsConfig {
            category: Some("work".to_string()),
            priority: Some(Priority::Low),
        });

        session.dispatch(add("Configured"));
        session.dispatch(Intent::Add {
            text: "Explicit".to_string(),
            category: Some("personal".to_string()),
            priority: Some(Priority::High),
        });

        let configured = &session.store().tasks()[1];
        assert_eq!(configured.category, "work");
        assert_eq!(configured.priority, Priority::Low);
        let explicit = &session.store().tasks()[0];
        assert_eq!(explicit.category, "personal");
        assert_eq!(explicit.priority, Priority::High);
    }

    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> TaskResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> TaskResult<()> {
            Err(TaskError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_persist_failure_is_reported_but_state_kept() {
        let mut session = Dispatcher::new(TaskStore::load(ReadOnlyStorage));

        let notification = session.dispatch(add("Memory only")).unwrap();
        assert_eq!(notification.severity, Severity::Warning);
        assert!(matches!(notification.message, Message::PersistFailed(_)));
        assert_eq!(session.render().stats.total, 1);

        // Intents that don't write leave nothing pending
        assert_eq!(session.dispatch(Intent::SetFilter(TaskFilter::Active)), None);
    }
}

#[cfg(test)]
mod tests {
    use hsutil::api::{ActivityPage, EntityId, FixtureSource, Page, PageQuery, PageSource};
    use hsutil::libs::error::HubstaffError;
    use hsutil::libs::window::ReportWindow;
    use serde_json::json;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct FixtureContext {
        temp_dir: TempDir,
    }

    impl AsyncTestContext for FixtureContext {
        async fn setup() -> Self {
            FixtureContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn activity_query(project_id: &str) -> PageQuery {
        PageQuery::ProjectActivity {
            project_id: EntityId::from(project_id),
            window: ReportWindow::new("2024-03-14T00:00:00+00:00", "2024-03-14T23:59:59.999999+00:00"),
            extra_params: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_tokens_are_page_indexes() {
        let source = FixtureSource::bundled().unwrap();

        let first = source.fetch_page(&PageQuery::Projects, None).await.unwrap();
        assert_eq!(first["pagination"]["next_page_start_id"], "1");

        let last = source.fetch_page(&PageQuery::Projects, Some("1")).await.unwrap();
        assert!(last.get("pagination").is_none());
    }

    #[tokio::test]
    async fn test_bundled_projects_walk_both_pages() {
        let source = FixtureSource::bundled().unwrap();

        let pages = source.list_projects().collect_all().await.unwrap();
        let ids: Vec<String> = pages
            .iter()
            .flat_map(|page| page.projects.iter().map(|project| project.id.to_string()))
            .collect();

        assert_eq!(pages.len(), 2);
        assert_eq!(ids, vec!["101", "102", "103", "104"]);
    }

    #[tokio::test]
    async fn test_unknown_project_has_no_activity() {
        let source = FixtureSource::bundled().unwrap();

        let body = source.fetch_page(&activity_query("999"), None).await.unwrap();
        let page: ActivityPage = serde_json::from_value(body).unwrap();

        assert!(page.daily_activities.is_empty());
        assert!(page.users.is_empty());
        assert!(page.next_page_start_id().is_none());
    }

    #[tokio::test]
    async fn test_bad_tokens_are_rejected() {
        let source = FixtureSource::bundled().unwrap();

        let not_a_number = source.fetch_page(&PageQuery::Projects, Some("abc")).await;
        assert!(matches!(not_a_number, Err(HubstaffError::Fixture(_))));

        let out_of_range = source.fetch_page(&PageQuery::Projects, Some("7")).await;
        assert!(matches!(out_of_range, Err(HubstaffError::Fixture(_))));
    }

    #[tokio::test]
    async fn test_stale_pagination_in_file_is_replaced() {
        let source = FixtureSource::from_json(
            &json!({
                "projects": [{ "projects": [{ "id": 1 }], "pagination": { "next_page_start_id": "elsewhere" } }]
            })
            .to_string(),
        )
        .unwrap();

        let pages = source.list_projects().collect_all().await.unwrap();

        assert_eq!(pages.len(), 1);
    }

    #[test_context(FixtureContext)]
    #[tokio::test]
    async fn test_load_from_path(ctx: &mut FixtureContext) {
        let path = ctx.temp_dir.path().join("data.json");
        std::fs::write(
            &path,
            json!({
                "projects": [{ "projects": [{ "id": 5, "name": "Five" }] }],
                "project_activity": { "5": [{ "users": [], "daily_activities": [{ "user_id": 1, "tracked": 30 }] }] }
            })
            .to_string(),
        )
        .unwrap();

        let source = FixtureSource::from_path(&path).unwrap();
        let pages = source
            .list_project_activity(&EntityId::from(5), &ReportWindow::new("a", "b"), &[("include", "users")])
            .collect_all()
            .await
            .unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].daily_activities[0].tracked, 30);
    }

    #[test_context(FixtureContext)]
    #[test]
    fn test_missing_fixture_file(ctx: &mut FixtureContext) {
        let path = ctx.temp_dir.path().join("missing.json");
        assert!(matches!(FixtureSource::from_path(&path), Err(HubstaffError::Fixture(_))));
    }
}

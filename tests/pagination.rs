#[cfg(test)]
mod tests {
    use hsutil::api::hubstaff::page_request;
    use hsutil::api::{EntityId, PageQuery, PageRequest, PageSource, Pages, ProjectsPage, PAGE_START_PARAM};
    use hsutil::libs::error::{HubstaffError, Result};
    use hsutil::libs::window::ReportWindow;
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves pre-scripted pages keyed by the requested start token and
    /// records every request made.
    struct ScriptedSource {
        pages: HashMap<Option<String>, Value>,
        failing_token: Option<String>,
        max_pages: Option<usize>,
        calls: RefCell<Vec<Option<String>>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<(Option<&str>, Value)>) -> Self {
            Self {
                pages: pages.into_iter().map(|(token, page)| (token.map(str::to_string), page)).collect(),
                failing_token: None,
                max_pages: Some(1000),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Option<String>> {
            self.calls.borrow().clone()
        }
    }

    impl PageSource for ScriptedSource {
        async fn fetch_page(&self, _query: &PageQuery, page_start_id: Option<&str>) -> Result<Value> {
            let token = page_start_id.map(str::to_string);
            self.calls.borrow_mut().push(token.clone());
            if token.is_some() && token == self.failing_token {
                return Err(HubstaffError::Api {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    path: "groups/1/tasks".to_string(),
                });
            }
            self.pages
                .get(&token)
                .cloned()
                .ok_or_else(|| HubstaffError::Fixture(format!("unexpected token {:?}", token)))
        }

        fn max_pages(&self) -> Option<usize> {
            self.max_pages
        }
    }

    fn project_ids(pages: &[ProjectsPage]) -> Vec<String> {
        pages
            .iter()
            .flat_map(|page| page.projects.iter().map(|project| project.id.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_follows_tokens_in_order() {
        let source = ScriptedSource::new(vec![
            (None, json!({ "projects": [{ "id": 1 }], "pagination": { "next_page_start_id": "a" } })),
            (Some("a"), json!({ "projects": [{ "id": 2 }], "pagination": { "next_page_start_id": "b" } })),
            (Some("b"), json!({ "projects": [{ "id": 3 }] })),
        ]);

        let pages = source.list_projects().collect_all().await.unwrap();

        assert_eq!(project_ids(&pages), vec!["1", "2", "3"]);
        assert_eq!(
            source.calls(),
            vec![None, Some("a".to_string()), Some("b".to_string())]
        );
    }

    #[tokio::test]
    async fn test_pages_are_fetched_lazily() {
        let source = ScriptedSource::new(vec![
            (None, json!({ "projects": [{ "id": 1 }], "pagination": { "next_page_start_id": "a" } })),
            (Some("a"), json!({ "projects": [{ "id": 2 }] })),
        ]);

        let mut pages = source.list_projects();
        assert!(source.calls().is_empty());

        let first = pages.next_page().await.unwrap().unwrap();
        assert_eq!(first.projects.len(), 1);
        assert_eq!(source.calls().len(), 1);

        assert!(pages.next_page().await.unwrap().is_some());
        assert!(pages.next_page().await.unwrap().is_none());
        assert!(pages.next_page().await.unwrap().is_none());
        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_token_ends_the_sequence() {
        let source = ScriptedSource::new(vec![(
            None,
            json!({ "projects": [{ "id": 1 }], "pagination": { "next_page_start_id": "" } }),
        )]);

        let pages = source.list_projects().collect_all().await.unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(source.calls(), vec![None]);
    }

    #[tokio::test]
    async fn test_numeric_token_is_forwarded_as_text() {
        let source = ScriptedSource::new(vec![
            (None, json!({ "projects": [], "pagination": { "next_page_start_id": 1234 } })),
            (Some("1234"), json!({ "projects": [{ "id": 5 }], "pagination": {} })),
        ]);

        let pages = source.list_projects().collect_all().await.unwrap();

        assert_eq!(project_ids(&pages), vec!["5"]);
    }

    #[tokio::test]
    async fn test_hop_cap_stops_a_looping_server() {
        let mut source = ScriptedSource::new(vec![
            (None, json!({ "projects": [], "pagination": { "next_page_start_id": "loop" } })),
            (Some("loop"), json!({ "projects": [], "pagination": { "next_page_start_id": "loop" } })),
        ]);
        source.max_pages = Some(3);

        let mut pages = source.list_projects();
        for _ in 0..3 {
            assert!(pages.next_page().await.unwrap().is_some());
        }
        let err = pages.next_page().await.unwrap_err();

        assert!(matches!(err, HubstaffError::PageLimitExceeded { max_pages: 3 }));
        assert_eq!(source.calls().len(), 3);
        assert!(pages.next_page().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_error_mid_sequence_propagates() {
        let mut source = ScriptedSource::new(vec![(
            None,
            json!({ "projects": [{ "id": 1 }], "pagination": { "next_page_start_id": "b" } }),
        )]);
        source.failing_token = Some("b".to_string());

        let result = source.list_projects().collect_all().await;

        match result {
            Err(HubstaffError::Api { status, .. }) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
            other => panic!("expected an API error, got {:?}", other.map(|pages| pages.len())),
        }
    }

    #[tokio::test]
    async fn test_disabled_cap_walks_every_page() {
        let source = ScriptedSource::new(vec![
            (None, json!({ "projects": [{ "id": 1 }], "pagination": { "next_page_start_id": "a" } })),
            (Some("a"), json!({ "projects": [{ "id": 2 }], "pagination": { "next_page_start_id": "b" } })),
            (Some("b"), json!({ "projects": [{ "id": 3 }] })),
        ]);

        let pages = Pages::<_, ProjectsPage>::new(&source, PageQuery::Projects, None)
            .collect_all()
            .await
            .unwrap();

        assert_eq!(project_ids(&pages), vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_zero_cap_refuses_before_fetching() {
        let source = ScriptedSource::new(vec![(None, json!({ "projects": [] }))]);

        let result = Pages::<_, ProjectsPage>::new(&source, PageQuery::Projects, Some(0))
            .collect_all()
            .await;

        assert!(matches!(result, Err(HubstaffError::PageLimitExceeded { max_pages: 0 })));
        assert!(source.calls().is_empty());
    }

    #[test]
    fn test_with_page_start_replaces_token() {
        let request = PageRequest::get("groups/1/tasks").param("page_limit", "500");

        let first = request.with_page_start(None);
        assert_eq!(first.params, vec![("page_limit".to_string(), "500".to_string())]);

        let second = request.with_page_start(Some("a")).with_page_start(Some("b"));
        assert_eq!(
            second.params,
            vec![
                ("page_limit".to_string(), "500".to_string()),
                (PAGE_START_PARAM.to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_projects_request() {
        let request = page_request(&EntityId::from(42), 500, &PageQuery::Projects);

        assert_eq!(request.method, reqwest::Method::GET);
        assert_eq!(request.path, "groups/42/tasks");
        assert!(request.headers.is_empty());
        assert_eq!(request.params, vec![("page_limit".to_string(), "500".to_string())]);
    }

    #[test]
    fn test_activity_request_carries_window_headers() {
        let window = ReportWindow::new("2024-03-14T00:00:00+00:00", "2024-03-14T23:59:59.999999+00:00");
        let query = PageQuery::ProjectActivity {
            project_id: EntityId::from("77"),
            window,
            extra_params: vec![
                ("include".to_string(), "users".to_string()),
                ("page_limit".to_string(), "10".to_string()),
            ],
        };

        let request = page_request(&EntityId::from(42), 500, &query);

        assert_eq!(request.path, "tasks/77/actions/day");
        assert_eq!(
            request.headers,
            vec![
                ("DateStart".to_string(), "2024-03-14T00:00:00+00:00".to_string()),
                ("DateStop".to_string(), "2024-03-14T23:59:59.999999+00:00".to_string()),
            ]
        );
        assert_eq!(
            request.params,
            vec![
                ("include".to_string(), "users".to_string()),
                ("page_limit".to_string(), "10".to_string()),
            ]
        );
    }
}

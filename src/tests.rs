#[cfg(test)]
mod integration_tests {
    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::{setup_csv_test_app, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    const CSV_FIXTURE: &str = "\
Latitude,Longitude,Temperature,Salinity,Pressure,Depth,Date,Platform\n\
10.0,70.0,20.0,34.0,5.0,500,2024-07-01,2902746\n\
11.0,71.0,22.0,35.0,5.0,700,2024-07-02,2902747\n\
not-a-number,72.0,23.0,35.5,5.0,600,2024-07-03,2902748";

    #[tokio::test]
    async fn test_health_check() {
        // Setup test server
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        // Send GET request to health endpoint
        let response = server.get("/health").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["dataset"], "builtin");
        assert_eq!(body["records"], 10);
    }

    #[tokio::test]
    async fn test_get_floats() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/floats").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Floats retrieved successfully");
        assert_eq!(body.data.len(), 10);
        assert_eq!(body.data[0]["id"], "F001");
        assert_eq!(body.data[0]["status"], "active");
    }

    #[tokio::test]
    async fn test_get_floats_filtered_by_status() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/floats?status=inactive").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 3);
        assert!(body.data.iter().all(|f| f["status"] == "inactive"));
    }

    #[tokio::test]
    async fn test_get_float_by_id() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/floats/F003").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["id"], "F003");
        assert_eq!(body.data["status"], "inactive");
        assert_eq!(body.data["depth"], 200.0);
    }

    #[tokio::test]
    async fn test_get_float_not_found() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/floats/F999").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_profiles_empty_without_csv() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/profiles").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.data.is_empty());
    }

    #[tokio::test]
    async fn test_statistics_over_builtin_fleet() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/statistics").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.data["categories"], 2);
        assert_eq!(body.data["processed"], 10);
        assert_eq!(body.data["active"], 7);
        assert_eq!(body.data["inactive"], 3);
        assert_eq!(body.data["csv_count"], 0);
        assert_eq!(body.data["avg_temperature"], 28.1);
        assert_eq!(body.data["avg_salinity"], 35.3);
        assert_eq!(body.data["avg_depth"], 143.0);
    }

    #[tokio::test]
    async fn test_statistics_served_from_cache_on_repeat() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let first = server.get("/api/v1/statistics").await;
        first.assert_status(StatusCode::OK);

        let second = server.get("/api/v1/statistics").await;
        second.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = second.json();
        assert_eq!(body.message, "Panel statistics retrieved from cache");
    }

    #[tokio::test]
    async fn test_chart_geometry_depth() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/charts/depth").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let data = &body.data;

        assert_eq!(data["metric"], "depth");
        assert_eq!(data["points"].as_array().unwrap().len(), 7);
        // Depth 100 (F001) is the series minimum and maps to the bottom
        // edge; depth 200 (F003) is the maximum and maps to the top edge.
        assert_eq!(data["points"][0]["value"], 100.0);
        assert_eq!(data["points"][0]["y"], 125.0);
        assert_eq!(data["points"][2]["value"], 200.0);
        assert_eq!(data["points"][2]["y"], 15.0);

        assert_eq!(data["y_ticks"].as_array().unwrap().len(), 6);
        assert_eq!(data["y_ticks"][0]["label"], "200");
        assert_eq!(data["x_ticks"][0]["label"], "F001");
        assert_eq!(data["x_ticks"][6]["label"], "F007");

        let line_path = data["line_path"].as_str().unwrap();
        assert!(line_path.starts_with("M 60 125"));
        let area_path = data["area_path"].as_str().unwrap();
        assert!(area_path.ends_with("Z"));
    }

    #[tokio::test]
    async fn test_chart_geometry_unknown_metric() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/charts/pressure").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chart_svg() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/charts/temperature/svg").await;

        response.assert_status(StatusCode::OK);
        let content_type = response.header("content-type");
        assert!(content_type
            .to_str()
            .unwrap()
            .starts_with("image/svg+xml"));

        let document = response.text();
        assert!(document.starts_with("<svg"));
        assert!(document.contains("#ff6b6b"));
        assert!(document.contains("Temperature (°C)"));
    }

    #[tokio::test]
    async fn test_chart_svg_unknown_metric() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/charts/wind/svg").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_panel_snapshot() {
        let app = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/panel").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let charts = body.data["charts"].as_array().unwrap();

        assert_eq!(charts.len(), 3);
        assert_eq!(charts[0]["metric"], "temperature");
        assert_eq!(charts[1]["metric"], "salinity");
        assert_eq!(charts[2]["metric"], "depth");
        assert_eq!(body.data["statistics"]["processed"], 10);
    }

    #[tokio::test]
    async fn test_csv_backed_service() {
        // The invalid-latitude row is discarded at parse time.
        let app = setup_csv_test_app(CSV_FIXTURE);
        let server = TestServer::new(app).unwrap();

        let health: serde_json::Value = server.get("/health").await.json();
        assert_eq!(health["dataset"], "csv");
        assert_eq!(health["records"], 2);

        let profiles: ApiResponse<Vec<serde_json::Value>> =
            server.get("/api/v1/profiles").await.json();
        assert_eq!(profiles.data.len(), 2);
        assert_eq!(profiles.data[0]["platform"], "2902746");

        let limited: ApiResponse<Vec<serde_json::Value>> =
            server.get("/api/v1/profiles?limit=1").await.json();
        assert_eq!(limited.data.len(), 1);

        let statistics: ApiResponse<serde_json::Value> =
            server.get("/api/v1/statistics").await.json();
        assert_eq!(statistics.data["csv_count"], 2);
        assert_eq!(statistics.data["processed"], 2);
        assert_eq!(statistics.data["avg_temperature"], 21.0);
        assert_eq!(statistics.data["avg_depth"], 600.0);

        // Charts follow the CSV series, two samples wide.
        let chart: ApiResponse<serde_json::Value> =
            server.get("/api/v1/charts/temperature").await.json();
        assert_eq!(chart.data["points"].as_array().unwrap().len(), 2);
    }
}

use actix_web::{web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::Schema;

async fn graphql(schema: web::Data<Schema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// The schema itself must be registered as `web::Data<Schema>` app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/graphql").route(web::post().to(graphql)))
        .service(web::resource("/graphiql").route(web::get().to(graphiql)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::create_schema;
    use crate::repositories::test_result_repository::MockTestResultRepository;
    use crate::test_utils::{app_state, fixtures, providers, repositories};
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn student_results_query_over_http() {
        let mut results = MockTestResultRepository::new();
        results
            .expect_list_for_student()
            .returning(|student_id| Ok(vec![fixtures::result("r-1", "test-1", student_id)]));

        let mut repos = repositories();
        repos.results = Arc::new(results);
        let schema = create_schema(app_state(repos, providers()).await);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(schema))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(serde_json::json!({
                "query": "{ studentResults(studentId: \"s-1\") { id score passed } }"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["studentResults"][0]["id"], "r-1");
        assert_eq!(body["data"]["studentResults"][0]["score"], 5);
    }

    #[actix_web::test]
    async fn graphiql_page_is_served() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/graphiql").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }
}

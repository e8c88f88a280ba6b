use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{
        AddQuestionRequest, CreateTestRequest, SubmitTestRequest, TestListParams,
    },
};

#[get("/api/tests")]
async fn list_tests(
    state: web::Data<Arc<AppState>>,
    query: web::Query<TestListParams>,
) -> Result<HttpResponse, AppError> {
    let tests = state.test_service.list_tests(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tests))
}

#[post("/api/tests")]
async fn create_test(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateTestRequest>,
) -> Result<HttpResponse, AppError> {
    let test = state.test_service.create_test(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(test))
}

#[get("/api/tests/{id}")]
async fn get_test(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let test = state.test_service.get_test(&id).await?;
    Ok(HttpResponse::Ok().json(test))
}

#[post("/api/tests/{id}/questions")]
async fn add_question(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<AddQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .test_service
        .add_question(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(question))
}

#[post("/api/tests/{id}/submissions")]
async fn submit_test(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<SubmitTestRequest>,
) -> Result<HttpResponse, AppError> {
    let receipt = state
        .test_service
        .submit_test(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(receipt))
}

#[get("/api/tests/{id}/results")]
async fn test_results(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let results = state.test_service.test_results(&id).await?;
    Ok(HttpResponse::Ok().json(results))
}

#[get("/api/students/{id}/results")]
async fn student_results(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let results = state.test_service.student_results(&id).await?;
    Ok(HttpResponse::Ok().json(results))
}

#[get("/api/results/{id}")]
async fn get_result(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = state.test_service.get_result(&id).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_tests)
        .service(create_test)
        .service(get_test)
        .service(add_question)
        .service(submit_test)
        .service(test_results)
        .service(student_results)
        .service(get_result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_repository::MockTestRepository;
    use crate::repositories::test_result_repository::MockTestResultRepository;
    use crate::test_utils::{app_state, fixtures, providers, repositories};
    use actix_web::{http::StatusCode, test, App};

    async fn state_with(
        tests: MockTestRepository,
        results: MockTestResultRepository,
    ) -> web::Data<Arc<AppState>> {
        let mut repos = repositories();
        repos.tests = Arc::new(tests);
        repos.results = Arc::new(results);
        web::Data::new(Arc::new(app_state(repos, providers()).await))
    }

    fn letter_test_repo() -> MockTestRepository {
        let mut tests = MockTestRepository::new();
        tests
            .expect_find_by_id()
            .returning(|id| Ok(Some(fixtures::placement_test(id))));
        tests.expect_questions_for_test().returning(|test_id| {
            Ok(vec![
                fixtures::question(test_id, "q1", "Sincerely", 5, 1),
                fixtures::question(test_id, "q2", "Dear Sir", 5, 2),
            ])
        });
        tests
    }

    #[actix_web::test]
    async fn submission_returns_receipt() {
        let mut results = MockTestResultRepository::new();
        results.expect_create().times(1).returning(|result| Ok(result));

        let app = test::init_service(
            App::new()
                .app_data(state_with(letter_test_repo(), results).await)
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/tests/test-1/submissions")
            .set_json(serde_json::json!({
                "student_id": "s-1",
                "started_at": "2026-03-01T09:00:00Z",
                "answers": [
                    {"question_id": "q1", "answer": "sincerely"},
                    {"question_id": "q2", "answer": "To whom"}
                ]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["score"], 5);
        assert_eq!(body["total_points"], 10);
        assert_eq!(body["percentage_score"], 50.0);
        assert_eq!(body["passed"], false);
        assert!(body["result_id"].is_string());
    }

    #[actix_web::test]
    async fn submission_to_unknown_test_is_404() {
        let mut tests = MockTestRepository::new();
        tests.expect_find_by_id().returning(|_| Ok(None));

        let app = test::init_service(
            App::new()
                .app_data(state_with(tests, MockTestResultRepository::new()).await)
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/tests/missing/submissions")
            .set_json(serde_json::json!({
                "student_id": "s-1",
                "started_at": "2026-03-01T09:00:00Z",
                "answers": []
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn student_results_are_listed() {
        let mut results = MockTestResultRepository::new();
        results
            .expect_list_for_student()
            .returning(|student_id| Ok(vec![fixtures::result("r-1", "test-1", student_id)]));

        let app = test::init_service(
            App::new()
                .app_data(state_with(MockTestRepository::new(), results).await)
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/students/s-1/results")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["id"], "r-1");
        assert_eq!(body[0]["student_id"], "s-1");
    }

    #[actix_web::test]
    async fn test_details_include_ordered_questions() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(letter_test_repo(), MockTestResultRepository::new()).await)
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/tests/test-1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["title"], "Placement Test");
        assert_eq!(body["questions"][0]["id"], "q1");
        assert_eq!(body["questions"][1]["id"], "q2");
    }
}

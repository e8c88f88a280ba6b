use async_graphql::{Context, Object, Result, ResultExt};

use crate::{
    app_state::AppState,
    models::{
        domain::{Test, TestResult, TestType, TestWithQuestions},
        dto::request::TestListParams,
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A test with its questions in presentation order.
    async fn test(&self, ctx: &Context<'_>, id: String) -> Result<TestWithQuestions> {
        let state = ctx.data::<AppState>()?;
        state.test_service.get_test(&id).await.extend()
    }

    async fn tests(
        &self,
        ctx: &Context<'_>,
        company_id: Option<String>,
        test_type: Option<TestType>,
    ) -> Result<Vec<Test>> {
        let state = ctx.data::<AppState>()?;
        state
            .test_service
            .list_tests(TestListParams {
                company_id,
                test_type,
            })
            .await
            .extend()
    }

    /// Newest first.
    async fn student_results(&self, ctx: &Context<'_>, student_id: String) -> Result<Vec<TestResult>> {
        let state = ctx.data::<AppState>()?;
        state.test_service.student_results(&student_id).await.extend()
    }
}

use async_graphql::{Context, Object, Result, ResultExt};

use crate::{
    app_state::AppState,
    models::{
        domain::{Question, Test},
        dto::{
            request::{AddQuestionRequest, CreateTestRequest, SubmitTestRequest},
            response::SubmissionReceipt,
        },
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn submit_test_results(
        &self,
        ctx: &Context<'_>,
        test_id: String,
        input: SubmitTestRequest,
    ) -> Result<SubmissionReceipt> {
        let state = ctx.data::<AppState>()?;
        state.test_service.submit_test(&test_id, input).await.extend()
    }

    async fn create_test(&self, ctx: &Context<'_>, input: CreateTestRequest) -> Result<Test> {
        let state = ctx.data::<AppState>()?;
        state.test_service.create_test(input).await.extend()
    }

    async fn add_question(
        &self,
        ctx: &Context<'_>,
        test_id: String,
        input: AddQuestionRequest,
    ) -> Result<Question> {
        let state = ctx.data::<AppState>()?;
        state.test_service.add_question(&test_id, input).await.extend()
    }
}

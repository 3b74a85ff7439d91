//! Best-effort review text enhancement.

use crate::{
    model::review::{EnhanceRequestDto, EnhanceResponseDto},
    server::external::llm,
};

/// Ask the language model to improve the review prose.
///
/// Any failure leaves the original text unchanged; enhancement is never a
/// reason a review cannot be submitted.
pub async fn enhance_review(
    llm_client: &llm::Client,
    request: &EnhanceRequestDto,
) -> EnhanceResponseDto {
    let context = llm::ReviewContext {
        place_name: &request.place_name,
        category_label: request.category.label(),
        dish_name: request.dish_name.as_deref(),
    };

    match llm_client.enhance_review(&request.comment, &context).await {
        Ok(comment) => EnhanceResponseDto {
            comment,
            enhanced: true,
        },
        Err(e) => {
            tracing::warn!("Review enhancement failed, returning original text: {:?}", e);

            EnhanceResponseDto {
                comment: request.comment.clone(),
                enhanced: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use entity::category::Category;
    use savora_test_utils::prelude::*;

    use super::*;

    fn request() -> EnhanceRequestDto {
        EnhanceRequestDto {
            comment: "good kebab".to_string(),
            place_name: "Kebabistan".to_string(),
            category: Category::Turkish,
            dish_name: None,
        }
    }

    /// Expect the improved text when the language model responds
    #[tokio::test]
    async fn returns_enhanced_text() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!()?;
        let endpoint = test.llm().with_completion_endpoint("An excellent kebab experience.");

        let llm_client =
            llm::Client::new(&test.base_url(), "test-llm-api-key", "test-model").unwrap();
        let response = enhance_review(&llm_client, &request()).await;

        assert!(response.enhanced);
        assert_eq!(response.comment, "An excellent kebab experience.");
        endpoint.assert();

        Ok(())
    }

    /// Expect the original text unchanged when the language model fails
    #[tokio::test]
    async fn falls_back_to_original_text() -> Result<(), TestError> {
        let mut test = test_setup_with_tables!()?;
        let _endpoint = test.llm().with_failing_completion_endpoint();

        let llm_client =
            llm::Client::new(&test.base_url(), "test-llm-api-key", "test-model").unwrap();
        let response = enhance_review(&llm_client, &request()).await;

        assert!(!response.enhanced);
        assert_eq!(response.comment, "good kebab");

        Ok(())
    }
}

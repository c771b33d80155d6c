//! Creative studio — composes an optional text-generation provider with
//! the template fallback. Provider failures never reach the caller.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use canopy_core::types::{AdCreative, BusinessCategory};
use canopy_core::CanopyResult;

use crate::fallback::fallback_creative;

/// A creative generation request from the campaign wizard.
#[derive(Debug, Clone)]
pub struct CreativeRequest {
    pub prompt: String,
    pub business_category: BusinessCategory,
}

/// Black-box text-generation collaborator. Implementations wrap an LLM
/// API; the studio only relies on the fixed response shape.
#[async_trait]
pub trait CreativeProvider: Send + Sync {
    async fn generate(&self, request: &CreativeRequest) -> CanopyResult<AdCreative>;
}

/// Generates ad creatives, falling back to templates when no provider is
/// configured or the provider errors.
#[derive(Clone, Default)]
pub struct CreativeStudio {
    provider: Option<Arc<dyn CreativeProvider>>,
}

impl CreativeStudio {
    /// Studio with no upstream provider; every request uses the template
    /// fallback.
    pub fn template_only() -> Self {
        Self { provider: None }
    }

    pub fn with_provider(provider: Arc<dyn CreativeProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Generate a creative. Always succeeds: provider unavailability or
    /// failure degrades to the deterministic template for the category.
    pub async fn generate(&self, request: &CreativeRequest) -> AdCreative {
        match &self.provider {
            Some(provider) => match provider.generate(request).await {
                Ok(creative) => {
                    info!(category = %request.business_category, "creative generated by provider");
                    creative
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        category = %request.business_category,
                        "creative provider failed, using template fallback"
                    );
                    fallback_creative(request.business_category)
                }
            },
            None => fallback_creative(request.business_category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_core::CanopyError;

    struct FailingProvider;

    #[async_trait]
    impl CreativeProvider for FailingProvider {
        async fn generate(&self, _request: &CreativeRequest) -> CanopyResult<AdCreative> {
            Err(CanopyError::Creative("upstream timeout".to_string()))
        }
    }

    struct CannedProvider;

    #[async_trait]
    impl CreativeProvider for CannedProvider {
        async fn generate(&self, _request: &CreativeRequest) -> CanopyResult<AdCreative> {
            Ok(AdCreative {
                headline: "Fresh Sushi, Zero Wait".to_string(),
                description: "Hand-rolled daily in Soho".to_string(),
                cta: "Order Today".to_string(),
                ..AdCreative::default()
            })
        }
    }

    fn request() -> CreativeRequest {
        CreativeRequest {
            prompt: "promote our new lunch menu".to_string(),
            business_category: BusinessCategory::RestaurantFood,
        }
    }

    #[tokio::test]
    async fn no_provider_uses_template() {
        let studio = CreativeStudio::template_only();
        let creative = studio.generate(&request()).await;
        assert_eq!(creative.headline, "Restaurant & Food Ultimate Experience");
    }

    #[tokio::test]
    async fn provider_failure_never_propagates() {
        let studio = CreativeStudio::with_provider(Arc::new(FailingProvider));
        let creative = studio.generate(&request()).await;
        assert_eq!(creative.headline, "Restaurant & Food Ultimate Experience");
    }

    #[tokio::test]
    async fn provider_result_passes_through() {
        let studio = CreativeStudio::with_provider(Arc::new(CannedProvider));
        let creative = studio.generate(&request()).await;
        assert_eq!(creative.headline, "Fresh Sushi, Zero Wait");
    }
}

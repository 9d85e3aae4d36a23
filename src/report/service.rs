use crate::backend::Backend;
use crate::core::error::ServiceError;
use crate::models::item::{Category, Item, ItemDraft, ItemKind, ReportForm, UploadedImage};
use crate::utils::time::today_string;
use crate::validation::forms::validate_report;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;
use tracing::{debug, warn};

/// Bundled fallback image, used when no file was uploaded and no category
/// default could be resolved. Embedded so it is always available.
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml;base64,\
PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIxMjAiIGhlaWdo\
dD0iMTIwIj48cmVjdCB3aWR0aD0iMTIwIiBoZWlnaHQ9IjEyMCIgZmlsbD0iI2RkZCIvPjx0ZXh0\
IHg9IjYwIiB5PSI2NSIgZm9udC1zaXplPSIxNCIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZmlsbD0i\
IzU1NSI+aXRlbTwvdGV4dD48L3N2Zz4=";

/// Orchestrates a report submission end to end: validation, token check,
/// image resolution, record construction, insert.
pub struct ReportService {
    backend: Arc<dyn Backend>,
}

impl ReportService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// The token comes from the request's Authorization header; the
    /// report is attributed to whichever user the backend resolves it to.
    pub async fn submit(
        &self,
        form: ReportForm,
        kind: ItemKind,
        token: &str,
    ) -> Result<Item, ServiceError> {
        // Fail fast on missing fields; nothing is persisted on the way out.
        let report = validate_report(form)?;

        let user = self.backend.current_user(token).await?;

        let image_url = self.resolve_image(report.image, report.category).await;

        let draft = ItemDraft {
            name: report.name,
            description: report.description,
            location: report.location,
            contact: report.contact,
            category: report.category,
            date: today_string(),
            image_url: Some(image_url),
            added_by: user.reg_no,
        };

        self.backend.insert_item(&draft, kind, token).await
    }

    /// Resolution order: the uploaded file, then the category's managed
    /// default, then the bundled asset. A failed default lookup is logged
    /// and falls through rather than failing the submission.
    async fn resolve_image(&self, upload: Option<UploadedImage>, category: Category) -> String {
        if let Some(image) = upload {
            return to_data_url(&image);
        }

        match self.backend.category_default_image(category).await {
            Ok(Some(url)) => {
                debug!(category = %category, "Using category default image");
                url
            }
            Ok(None) => FALLBACK_IMAGE.to_string(),
            Err(e) => {
                warn!(category = %category, error = %e, "Category default lookup failed, using bundled fallback");
                FALLBACK_IMAGE.to_string()
            }
        }
    }
}

/// Encode an uploaded file as a transportable `data:` URL.
fn to_data_url(image: &UploadedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.content_type,
        STANDARD.encode(&image.bytes)
    )
}

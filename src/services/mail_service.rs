use std::sync::Arc;

use serde_json::json;

use crate::{
    config::Config,
    error::{AppError, Result},
    models::{order::SoftwareOrder, request::ProjectRequest, trial::TrialRequest},
};

/// One templated notification per public form. Every notification goes to the
/// single configured operator address.
#[derive(Debug, Clone)]
pub enum Notification {
    Trial(TrialRequest),
    Project(ProjectRequest),
    Purchase {
        order: SoftwareOrder,
        product_title: String,
    },
    Contact {
        name: String,
        email: String,
        message: String,
    },
}

impl Notification {
    pub fn subject(&self) -> String {
        match self {
            Self::Trial(t) => format!("طلب تجربة جديد من {}", t.company_name),
            Self::Project(r) => format!("طلب مشروع جديد: {}", r.title),
            Self::Purchase { order, .. } => format!("طلب شراء جديد من {}", order.company_name),
            Self::Contact { name, .. } => format!("رسالة تواصل جديدة من {name}"),
        }
    }

    pub fn html(&self) -> String {
        let body = match self {
            Self::Trial(t) => format!(
                "<p>اسم الشركة: {}</p><p>واتساب: {}</p>",
                t.company_name, t.whatsapp
            ),
            Self::Project(r) => format!(
                "<p>الاسم: {}</p><p>البريد: {}</p><p>الهاتف: {}</p>\
                 <h3>{}</h3><p>{}</p>",
                r.name,
                r.email.as_deref().unwrap_or("-"),
                r.phone.as_deref().unwrap_or("-"),
                r.title,
                r.description
            ),
            Self::Purchase {
                order,
                product_title,
            } => format!(
                "<p>المنتج: {}</p><p>اسم الشركة: {}</p><p>واتساب: {}</p>",
                product_title, order.company_name, order.whatsapp
            ),
            Self::Contact {
                name,
                email,
                message,
            } => format!(
                "<p>الاسم: {name}</p><p>البريد: {email}</p><p>{message}</p>"
            ),
        };

        format!(
            "<div dir=\"rtl\" style=\"font-family: sans-serif\">\
             <h2>{}</h2>{body}</div>",
            self.subject()
        )
    }
}

/// Thin client over the transactional email HTTP API. Without an API key the
/// service runs in log-only mode and never touches the network.
pub struct MailService {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    from: String,
    to: String,
}

impl MailService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from: config.mail_from.clone(),
            to: config.notify_email.clone(),
        }
    }

    pub async fn send(&self, notification: &Notification) -> Result<()> {
        let Some(api_key) = &self.api_key else {
            tracing::info!(
                subject = %notification.subject(),
                "mail disabled, skipping notification"
            );
            return Ok(());
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&json!({
                "from": self.from,
                "to": [self.to],
                "subject": notification.subject(),
                "html": notification.html(),
            }))
            .send()
            .await
            .map_err(|e| AppError::Mail(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Mail(format!(
                "provider returned {}",
                response.status()
            )));
        }

        Ok(())
    }

    /// Fire-and-forget used by the form handlers: a failed send is logged and
    /// never fails the originating insert.
    pub fn spawn_send(self: Arc<Self>, notification: Notification) {
        tokio::spawn(async move {
            if let Err(e) = self.send(&notification).await {
                tracing::error!(%e, "notification email failed");
            }
        });
    }
}

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use thiserror::Error;

const SENDGRID_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Serialize)]
struct SendGridEmail<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct SendGridPersonalization<'a> {
    to: Vec<SendGridEmail<'a>>,
}

#[derive(Debug, Serialize)]
struct SendGridContent<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct SendGridRequest<'a> {
    personalizations: Vec<SendGridPersonalization<'a>>,
    from: SendGridEmail<'a>,
    subject: &'a str,
    content: Vec<SendGridContent<'a>>,
}

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("email delivery is not configured")]
    NotConfigured,

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("SendGrid returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Transactional mail for the account flow.
#[derive(Clone)]
pub struct EmailService {
    http: reqwest::Client,
    api_key: Option<String>,
    from: String,
    client_url: String,
}

impl EmailService {
    pub fn new(
        http: reqwest::Client,
        api_key: Option<String>,
        from: String,
        client_url: String,
    ) -> Self {
        Self {
            http,
            api_key,
            from,
            client_url: client_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn verification_url(&self, token: &str) -> String {
        format!("{}/verify-email/{}", self.client_url, token)
    }

    pub fn reset_url(&self, token: &str) -> String {
        format!("{}/reset-password?token={}", self.client_url, token)
    }

    pub async fn send_html_email(
        &self,
        to_email: &str,
        subject: &str,
        html_content: &str,
    ) -> Result<(), EmailError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(EmailError::NotConfigured);
        };

        let request = SendGridRequest {
            personalizations: vec![SendGridPersonalization {
                to: vec![SendGridEmail { email: to_email }],
            }],
            from: SendGridEmail { email: &self.from },
            subject,
            content: vec![SendGridContent {
                content_type: "text/html",
                value: html_content,
            }],
        };

        let response = self
            .http
            .post(SENDGRID_URL)
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            log::info!("Sent \"{}\" to {}", subject, to_email);
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(EmailError::Api { status, body })
        }
    }

    pub async fn send_email_verification(
        &self,
        email: &str,
        first_name: &str,
        token: &str,
    ) -> Result<(), EmailError> {
        let url = self.verification_url(token);
        let html = layout(
            first_name,
            "Thanks for signing up! Please confirm your email address to start planning trips.",
            &url,
            "Verify Email",
            "This link expires in 24 hours. If you did not create an account, you can ignore this email.",
        );
        self.send_html_email(email, "Welcome to GlobeTrotter - Verify Your Email", &html)
            .await
    }

    pub async fn send_password_reset(
        &self,
        email: &str,
        first_name: &str,
        token: &str,
    ) -> Result<(), EmailError> {
        let url = self.reset_url(token);
        let html = layout(
            first_name,
            "We received a request to reset your password.",
            &url,
            "Reset Password",
            "This link expires in 1 hour. If you did not ask for a reset, your password stays unchanged.",
        );
        self.send_html_email(email, "GlobeTrotter - Reset Your Password", &html)
            .await
    }

    pub async fn send_welcome_email(&self, email: &str, first_name: &str) -> Result<(), EmailError> {
        let url = format!("{}/dashboard", self.client_url);
        let html = layout(
            first_name,
            "Your email is verified and your account is ready.",
            &url,
            "Start Planning",
            "Happy travels!",
        );
        self.send_html_email(email, "Welcome to GlobeTrotter - Your Account is Verified!", &html)
            .await
    }
}

fn layout(first_name: &str, intro: &str, url: &str, action: &str, footer: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background-color: #f8f9fa; padding: 20px; border-radius: 5px; text-align: center; }}
        .button {{ display: inline-block; padding: 12px 24px; background-color: #2563eb; color: #fff; border-radius: 5px; text-decoration: none; }}
        .footer {{ margin-top: 30px; font-size: 14px; color: #666; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header"><h1>GlobeTrotter</h1></div>
        <p>Hi {first_name},</p>
        <p>{intro}</p>
        <p><a class="button" href="{url}">{action}</a></p>
        <p>Or paste this link into your browser: {url}</p>
        <div class="footer"><p>{footer}</p><p>The GlobeTrotter Team</p></div>
    </div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(api_key: Option<&str>) -> EmailService {
        EmailService::new(
            reqwest::Client::new(),
            api_key.map(str::to_string),
            "noreply@globetrotter.app".to_string(),
            "http://localhost:3000/".to_string(),
        )
    }

    #[test]
    fn test_links_use_client_url() {
        let email = service(None);
        assert_eq!(
            email.verification_url("abc"),
            "http://localhost:3000/verify-email/abc"
        );
        assert_eq!(
            email.reset_url("xyz"),
            "http://localhost:3000/reset-password?token=xyz"
        );
    }

    #[test]
    fn test_layout_contains_link() {
        let html = layout("Asha", "Hello", "http://x/verify", "Verify Email", "Bye");
        assert!(html.contains("Hi Asha,"));
        assert!(html.contains(r#"href="http://x/verify""#));
    }

    #[actix_rt::test]
    async fn test_unconfigured_delivery_fails() {
        let result = service(None)
            .send_password_reset("user@example.com", "Asha", "token")
            .await;
        assert!(matches!(result, Err(EmailError::NotConfigured)));
    }
}

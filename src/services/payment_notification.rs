//! Payment email detection and notification dispatch.

use std::sync::Arc;

use regex::{Regex, RegexBuilder};

use crate::config::PaymentConfig;
use crate::external::graph::MailGateway;
use crate::models::MailDetails;

/// Recipient used when no notification recipient is configured
const DEFAULT_RECIPIENT: &str = "admin@company.com";

/// Built-in payment keywords, Spanish and English, word-boundary anchored
const DEFAULT_KEYWORDS: &[&str] = &[
    r"\bpago\b",
    r"\bpagos\b",
    r"\bpagar\b",
    r"\bpagado\b",
    r"\bpagó\b",
    r"\bpagué\b",
    r"\bpaguè\b",
    r"\bpagamos\b",
    r"\bpagaron\b",
    r"\bpayment\b",
    r"\bpaid\b",
    r"\bpay\b",
];

/// Whole-word, case-insensitive keyword matcher.
///
/// The keyword set compiles into a single alternation once per mutation,
/// never per call. Mutation is administrative and rare, so the matcher is a
/// plain owned value with no lock around it.
#[derive(Debug, Clone)]
pub struct PaymentMatcher {
    patterns: Vec<String>,
    regex: Regex,
}

impl PaymentMatcher {
    /// Matcher with the built-in keyword set plus `extra_keywords` from
    /// configuration (escaped, word-boundary anchored).
    pub fn new(extra_keywords: &[String]) -> Self {
        let mut matcher = Self::default();
        for keyword in extra_keywords {
            matcher.add_keyword(keyword);
        }
        matcher
    }

    /// Whether `subject` contains any configured keyword as a whole word.
    ///
    /// An empty subject never matches.
    pub fn matches(&self, subject: &str) -> bool {
        if subject.is_empty() {
            return false;
        }
        self.regex.is_match(subject)
    }

    /// Add a keyword to the detection set and recompile the pattern.
    ///
    /// The raw keyword is escaped and anchored with word boundaries;
    /// duplicates are ignored.
    pub fn add_keyword(&mut self, keyword: &str) {
        let pattern = format!(r"\b{}\b", regex::escape(keyword));
        if self.patterns.contains(&pattern) {
            return;
        }
        self.patterns.push(pattern);
        self.regex = Self::compile(&self.patterns);
        tracing::info!(keyword = %keyword, "Added payment keyword");
    }

    /// Number of configured keyword patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn compile(patterns: &[String]) -> Regex {
        // Patterns are escaped fragments joined with `|`; compilation only
        // fails on an empty set, which Default precludes.
        RegexBuilder::new(&patterns.join("|"))
            .case_insensitive(true)
            .build()
            .expect("payment keyword alternation must compile")
    }
}

impl Default for PaymentMatcher {
    fn default() -> Self {
        let patterns: Vec<String> = DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect();
        let regex = Self::compile(&patterns);
        Self { patterns, regex }
    }
}

/// Service that classifies fetched mail and sends payment notifications.
pub struct PaymentNotificationService {
    gateway: Arc<dyn MailGateway>,
    matcher: PaymentMatcher,
    notification_recipient: String,
}

impl PaymentNotificationService {
    pub fn new(gateway: Arc<dyn MailGateway>, config: &PaymentConfig) -> Self {
        Self {
            gateway,
            matcher: PaymentMatcher::new(&config.extra_keywords),
            notification_recipient: config
                .notification_recipient
                .clone()
                .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
        }
    }

    /// Whether the subject contains payment-related keywords.
    pub fn check_payment_subject(&self, subject: &str) -> bool {
        if self.matcher.matches(subject) {
            tracing::info!(subject = %subject, "Payment-related email detected");
            return true;
        }
        false
    }

    /// Classify the mail and send a notification when it is payment-related.
    ///
    /// Returns whether a notification was dispatched.
    pub async fn process_payment_email(&self, mail_details: &MailDetails) -> bool {
        if !self.check_payment_subject(&mail_details.subject) {
            return false;
        }
        self.send_payment_notification(mail_details, None).await
    }

    /// Send the payment notification email.
    ///
    /// Uses the configured recipient unless an explicit one is supplied.
    /// Delivery failures are logged and reported as `false`, never raised.
    pub async fn send_payment_notification(
        &self,
        mail_details: &MailDetails,
        recipient: Option<&str>,
    ) -> bool {
        let recipient = recipient.unwrap_or(&self.notification_recipient);

        let subject = format!("🔔 Notificación de Pago: {}", mail_details.subject);
        let message = Self::compose_notification_body(mail_details);

        tracing::info!(recipient = %recipient, "Sending payment notification");

        match self
            .gateway
            .send_mail(&subject, &message, recipient)
            .await
        {
            Ok(()) => {
                tracing::info!(recipient = %recipient, "Payment notification sent");
                true
            }
            Err(e) => {
                tracing::error!(recipient = %recipient, error = %e, "Failed to send payment notification");
                false
            }
        }
    }

    /// Add a keyword to the payment detection set.
    pub fn add_payment_keyword(&mut self, keyword: &str) {
        self.matcher.add_keyword(keyword);
    }

    /// Update the default notification recipient.
    pub fn set_notification_recipient(&mut self, email: &str) {
        self.notification_recipient = email.to_string();
        tracing::info!(recipient = %email, "Updated notification recipient");
    }

    /// Current default recipient
    pub fn notification_recipient(&self) -> &str {
        &self.notification_recipient
    }

    fn compose_notification_body(mail_details: &MailDetails) -> String {
        format!(
            "\nSe ha recibido un correo relacionado con pagos:\n\n\
             📧 DETALLES DEL CORREO:\n\
             ------------------------\n\
             De: {} <{}>\n\
             Asunto: {}\n\
             Fecha: {}\n\
             Importancia: {}\n\
             Tiene adjuntos: {}\n\n\
             📝 VISTA PREVIA:\n\
             ------------------------\n\
             {}\n\n\
             ------------------------\n\
             Este es un mensaje automático generado por el sistema de notificaciones.\n",
            mail_details.from_name,
            mail_details.from_address,
            mail_details.subject,
            mail_details.received_display(),
            mail_details.importance,
            if mail_details.has_attachments { "Sí" } else { "No" },
            mail_details.body_preview,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::graph::GraphError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeGateway {
        send_ok: bool,
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl FakeGateway {
        fn new(send_ok: bool) -> Arc<Self> {
            Arc::new(Self {
                send_ok,
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl MailGateway for FakeGateway {
        async fn fetch_message(
            &self,
            _user_id: &str,
            _message_id: &str,
        ) -> Result<MailDetails, GraphError> {
            Err(GraphError::MissingToken)
        }

        async fn send_mail(
            &self,
            subject: &str,
            message: &str,
            recipient: &str,
        ) -> Result<(), GraphError> {
            self.sent.lock().unwrap().push((
                subject.to_string(),
                message.to_string(),
                recipient.to_string(),
            ));
            if self.send_ok {
                Ok(())
            } else {
                Err(GraphError::Status {
                    status: 500,
                    body: "boom".to_string(),
                })
            }
        }

        fn is_configured(&self) -> bool {
            true
        }
    }

    fn sample_mail(subject: &str) -> MailDetails {
        MailDetails {
            id: "m1".to_string(),
            subject: subject.to_string(),
            from_name: "Ana Torres".to_string(),
            from_address: "ana@example.com".to_string(),
            body_preview: "Su factura vence pronto".to_string(),
            received: "2024-05-01T12:30:00Z".parse().ok(),
            has_attachments: false,
            importance: "normal".to_string(),
        }
    }

    fn service(gateway: Arc<FakeGateway>) -> PaymentNotificationService {
        PaymentNotificationService::new(gateway, &PaymentConfig::default())
    }

    // ------------------------------------------------------------------
    // Matcher
    // ------------------------------------------------------------------

    #[test]
    fn test_default_keywords_match_whole_words() {
        let matcher = PaymentMatcher::default();
        assert!(matcher.matches("Recordatorio de pago pendiente"));
        assert!(matcher.matches("PAGO confirmado"));
        assert!(matcher.matches("Payment due tomorrow"));
        assert!(matcher.matches("Invoice paid"));
        assert!(matcher.matches("Ya pagué la factura"));
        assert!(matcher.matches("El cliente pagó ayer"));
    }

    #[test]
    fn test_no_match_on_unrelated_subject() {
        let matcher = PaymentMatcher::default();
        assert!(!matcher.matches("Reunión semanal"));
        assert!(!matcher.matches(""));
    }

    #[test]
    fn test_word_boundaries_reject_substrings() {
        let matcher = PaymentMatcher::default();
        // "pay" must not match inside "prepayment"; neither must "payment"
        assert!(!matcher.matches("prepayment schedule"));
        // "pago" must not match inside "pagode"
        assert!(!matcher.matches("festival de pagode"));
        // but standalone forms still do
        assert!(matcher.matches("pay the invoice"));
    }

    #[test]
    fn test_add_keyword_recompiles_and_dedups() {
        let mut matcher = PaymentMatcher::default();
        let before = matcher.len();

        assert!(!matcher.matches("nueva factura"));
        matcher.add_keyword("factura");
        assert!(matcher.matches("nueva factura"));
        assert_eq!(matcher.len(), before + 1);

        matcher.add_keyword("factura");
        assert_eq!(matcher.len(), before + 1);
    }

    #[test]
    fn test_added_keyword_is_escaped_literally() {
        let mut matcher = PaymentMatcher::default();
        matcher.add_keyword("c.o.d");
        assert!(matcher.matches("envío c.o.d confirmado"));
        // the dot is literal, not a wildcard
        assert!(!matcher.matches("envío cxoxd confirmado"));
    }

    #[test]
    fn test_extra_keywords_from_config() {
        let matcher = PaymentMatcher::new(&["factura".to_string()]);
        assert!(matcher.matches("Factura adjunta"));
    }

    // ------------------------------------------------------------------
    // Service
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_payment_subject_dispatches_notification() {
        let gateway = FakeGateway::new(true);
        let service = service(gateway.clone());

        let dispatched = service
            .process_payment_email(&sample_mail("Recordatorio de pago pendiente"))
            .await;
        assert!(dispatched);

        let sent = gateway.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (subject, message, recipient) = &sent[0];
        assert_eq!(
            subject,
            "🔔 Notificación de Pago: Recordatorio de pago pendiente"
        );
        assert!(message.contains("Ana Torres <ana@example.com>"));
        assert!(message.contains("Su factura vence pronto"));
        assert!(message.contains("Tiene adjuntos: No"));
        assert_eq!(recipient, DEFAULT_RECIPIENT);
    }

    #[tokio::test]
    async fn test_non_payment_subject_is_ignored() {
        let gateway = FakeGateway::new(true);
        let service = service(gateway.clone());

        let dispatched = service
            .process_payment_email(&sample_mail("Reunión semanal"))
            .await;
        assert!(!dispatched);
        assert!(gateway.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_is_soft() {
        let gateway = FakeGateway::new(false);
        let service = service(gateway.clone());

        let dispatched = service
            .process_payment_email(&sample_mail("pago recibido"))
            .await;
        assert!(!dispatched);
        // the send was attempted
        assert_eq!(gateway.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_explicit_recipient_overrides_default() {
        let gateway = FakeGateway::new(true);
        let service = service(gateway.clone());

        service
            .send_payment_notification(&sample_mail("pago"), Some("finanzas@example.com"))
            .await;

        let sent = gateway.sent.lock().unwrap();
        assert_eq!(sent[0].2, "finanzas@example.com");
    }

    #[tokio::test]
    async fn test_configured_recipient_used_as_default() {
        let gateway = FakeGateway::new(true);
        let config = PaymentConfig {
            notification_recipient: Some("finance@example.com".to_string()),
            extra_keywords: Vec::new(),
        };
        let service = PaymentNotificationService::new(gateway.clone(), &config);

        service.process_payment_email(&sample_mail("pago")).await;
        assert_eq!(gateway.sent.lock().unwrap()[0].2, "finance@example.com");
    }

    #[test]
    fn test_set_notification_recipient() {
        let mut service = service(FakeGateway::new(true));
        assert_eq!(service.notification_recipient(), DEFAULT_RECIPIENT);

        service.set_notification_recipient("ops@example.com");
        assert_eq!(service.notification_recipient(), "ops@example.com");
    }
}

//! Booking/checkout coordinator: slot → draft → checkout → payment →
//! confirmation.
//!
//! # Design
//! The stage machine is client-observed, not client-enforced: status
//! transitions are backend-owned and the flow only displays and reacts to
//! what the backend returned. What the coordinator does own:
//!
//! - the load step fetches the option catalogs and the appointment
//!   snapshot together and fails as a whole if either fails; there is no
//!   partial checkout page;
//! - client-side validation is defense-in-depth only and blocks submission
//!   before anything touches the network;
//! - the two-phase gateway-window protocol: a placeholder window opens
//!   synchronously on the user gesture (popup blockers allow that), then
//!   is navigated to the gateway or closed once the initiation call
//!   resolves;
//! - a failed confirmation fetch after a synchronous payment is a DEGRADED
//!   success (`confirmation: None`, "booked, but no meeting link yet"),
//!   not a masked one and not a failure.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::types::{
    AppointmentCheckout, AppointmentConfirmation, CheckoutOptions, InitiatePaymentRequest,
};

/// The browser-tab half of the two-phase gateway protocol. Implementations
/// wrap whatever "open a tab" means for the host; tests use a recording
/// fake.
pub trait PaymentWindow {
    /// Open a blank placeholder synchronously, before any await point.
    fn open_placeholder(&mut self);
    /// Point the placeholder at the gateway.
    fn navigate(&mut self, url: &str);
    /// Close the placeholder: payment finished synchronously or failed.
    fn close(&mut self);
}

/// Pre-submit form state for the checkout page.
#[derive(Debug, Clone, Default)]
pub struct PaymentSelection {
    pub method_key: String,
    pub platform_id: Option<i64>,
    pub service_type: Option<String>,
    pub contact_full_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub agreed_to_terms: bool,
}

/// Inline, per-field messages for a submission blocked client-side.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", messages.join(" "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A step was invoked out of order (e.g. submit before load).
    #[error("checkout step out of order: expected {0}")]
    OutOfOrder(&'static str),
}

/// Client-observed progress of one booking.
#[derive(Debug, Clone)]
pub enum CheckoutStage {
    SlotSelected {
        expert_id: i64,
        availability_id: i64,
    },
    DraftCreated {
        appt_id: i64,
    },
    CheckoutLoaded {
        appt_id: i64,
        options: CheckoutOptions,
        snapshot: AppointmentCheckout,
    },
    PaymentInitiated {
        appt_id: i64,
        payment_id: i64,
        redirect_url: Option<String>,
    },
    Confirmed {
        appt_id: i64,
        /// `None` is the degraded success: paid, but the confirmation
        /// fetch (and with it the meeting link) failed.
        confirmation: Option<AppointmentConfirmation>,
    },
    Failed {
        error: ApiError,
    },
}

/// Result of a payment submission that reached the backend.
#[derive(Debug, Clone)]
pub enum PaymentOutcome {
    /// The placeholder window now shows the external gateway; the flow
    /// continues there.
    RedirectedToGateway {
        payment_id: i64,
        redirect_url: String,
    },
    /// Payment completed synchronously. `confirmation: None` means the
    /// follow-up confirmation fetch failed (degraded success).
    Completed {
        payment_id: i64,
        confirmation: Option<AppointmentConfirmation>,
    },
}

/// Drives one appointment from slot selection to confirmation.
pub struct CheckoutFlow<'a> {
    api: &'a ApiClient,
    stage: CheckoutStage,
}

impl<'a> CheckoutFlow<'a> {
    /// Start from a selected availability slot.
    pub fn new(api: &'a ApiClient, expert_id: i64, availability_id: i64) -> Self {
        Self {
            api,
            stage: CheckoutStage::SlotSelected {
                expert_id,
                availability_id,
            },
        }
    }

    /// Resume at the checkout page for an already-created draft (the
    /// appointment id arrived via the route).
    pub fn resume(api: &'a ApiClient, appt_id: i64) -> Self {
        Self {
            api,
            stage: CheckoutStage::DraftCreated { appt_id },
        }
    }

    pub fn stage(&self) -> &CheckoutStage {
        &self.stage
    }

    /// Create the draft appointment from the selected slot. Single
    /// attempt; the caller offers manual retry on failure.
    pub async fn create_draft(&mut self, cancel: &CancellationToken) -> Result<i64, CheckoutError> {
        let (expert_id, availability_id) = match &self.stage {
            CheckoutStage::SlotSelected {
                expert_id,
                availability_id,
            } => (*expert_id, *availability_id),
            _ => return Err(CheckoutError::OutOfOrder("slot selection")),
        };

        match self.api.book_appointment(expert_id, availability_id, cancel).await {
            Ok(draft) => {
                self.stage = CheckoutStage::DraftCreated {
                    appt_id: draft.appt_id,
                };
                Ok(draft.appt_id)
            }
            Err(err) if err.is_aborted() => Err(err.into()),
            Err(err) => {
                self.stage = CheckoutStage::Failed { error: err.clone() };
                Err(err.into())
            }
        }
    }

    /// Fetch the checkout catalogs and the appointment snapshot together.
    /// Both must succeed before payment can be initiated.
    pub async fn load(&mut self, cancel: &CancellationToken) -> Result<(), CheckoutError> {
        let appt_id = match &self.stage {
            CheckoutStage::DraftCreated { appt_id }
            | CheckoutStage::CheckoutLoaded { appt_id, .. } => *appt_id,
            _ => return Err(CheckoutError::OutOfOrder("a created draft")),
        };

        let loaded = tokio::try_join!(
            self.api.checkout_options(cancel),
            self.api.appointment_checkout(appt_id, cancel),
        );
        match loaded {
            Ok((options, snapshot)) => {
                self.stage = CheckoutStage::CheckoutLoaded {
                    appt_id,
                    options,
                    snapshot,
                };
                Ok(())
            }
            Err(err) if err.is_aborted() => Err(err.into()),
            Err(err) => {
                self.stage = CheckoutStage::Failed { error: err.clone() };
                Err(err.into())
            }
        }
    }

    /// Validate the form state without touching the network.
    pub fn validate(selection: &PaymentSelection) -> Result<(), ValidationError> {
        let mut messages = Vec::new();
        if selection.platform_id.is_none() {
            messages.push("Vui lòng chọn nền tảng họp.".to_string());
        }
        if selection.contact_full_name.trim().is_empty() {
            messages.push("Vui lòng nhập họ tên liên hệ.".to_string());
        }
        let email = selection.contact_email.trim();
        if email.is_empty() || !email.contains('@') {
            messages.push("Email liên hệ không hợp lệ.".to_string());
        }
        if !selection.agreed_to_terms {
            messages.push("Bạn cần đồng ý với điều khoản dịch vụ.".to_string());
        }
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { messages })
        }
    }

    /// Submit the payment using the two-phase gateway-window protocol.
    pub async fn submit<W: PaymentWindow>(
        &mut self,
        selection: &PaymentSelection,
        window: &mut W,
        cancel: &CancellationToken,
    ) -> Result<PaymentOutcome, CheckoutError> {
        let appt_id = match &self.stage {
            CheckoutStage::CheckoutLoaded { appt_id, .. } => *appt_id,
            _ => return Err(CheckoutError::OutOfOrder("a loaded checkout")),
        };
        Self::validate(selection)?;

        let body = InitiatePaymentRequest {
            method_key: selection.method_key.clone(),
            platform_id: selection.platform_id,
            service_type: selection.service_type.clone(),
            contact_full_name: Some(selection.contact_full_name.trim().to_string()),
            contact_email: Some(selection.contact_email.trim().to_string()),
            contact_phone: selection.contact_phone.clone(),
        };

        // Phase one: the placeholder must exist before the first await.
        window.open_placeholder();

        let initiation = match self.api.pay_appointment(appt_id, &body, cancel).await {
            Ok(initiation) => initiation,
            Err(err) => {
                window.close();
                if !err.is_aborted() {
                    self.stage = CheckoutStage::Failed { error: err.clone() };
                }
                return Err(err.into());
            }
        };

        if let Some(url) = initiation
            .redirect_url
            .as_deref()
            .filter(|url| !url.is_empty())
        {
            // Phase two, gateway path: the user finishes there.
            window.navigate(url);
            self.stage = CheckoutStage::PaymentInitiated {
                appt_id,
                payment_id: initiation.payment_id,
                redirect_url: Some(url.to_string()),
            };
            return Ok(PaymentOutcome::RedirectedToGateway {
                payment_id: initiation.payment_id,
                redirect_url: url.to_string(),
            });
        }

        // Phase two, synchronous path: the placeholder is now surplus.
        window.close();

        let confirmation = match self.api.appointment_confirmation(appt_id, cancel).await {
            Ok(confirmation) => Some(confirmation),
            Err(err) if err.is_aborted() => return Err(err.into()),
            Err(err) => {
                log::warn!("appointment {appt_id} paid but confirmation fetch failed: {err}");
                None
            }
        };

        self.stage = CheckoutStage::Confirmed {
            appt_id,
            confirmation: confirmation.clone(),
        };
        Ok(PaymentOutcome::Completed {
            payment_id: initiation.payment_id,
            confirmation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_selection() -> PaymentSelection {
        PaymentSelection {
            method_key: "mindpoints".into(),
            platform_id: Some(1),
            service_type: Some("video".into()),
            contact_full_name: "Trần Văn An".into(),
            contact_email: "an.tran@example.com".into(),
            contact_phone: Some("0901234567".into()),
            agreed_to_terms: true,
        }
    }

    #[test]
    fn complete_selection_passes_validation() {
        assert!(CheckoutFlow::validate(&complete_selection()).is_ok());
    }

    #[test]
    fn missing_platform_is_reported() {
        let selection = PaymentSelection {
            platform_id: None,
            ..complete_selection()
        };
        let err = CheckoutFlow::validate(&selection).unwrap_err();
        assert_eq!(err.messages, vec!["Vui lòng chọn nền tảng họp.".to_string()]);
    }

    #[test]
    fn blank_and_invalid_contact_fields_are_reported() {
        let selection = PaymentSelection {
            contact_full_name: "   ".into(),
            contact_email: "khong-phai-email".into(),
            ..complete_selection()
        };
        let err = CheckoutFlow::validate(&selection).unwrap_err();
        assert_eq!(err.messages.len(), 2);
    }

    #[test]
    fn unchecked_agreement_blocks_submission() {
        let selection = PaymentSelection {
            agreed_to_terms: false,
            ..complete_selection()
        };
        let err = CheckoutFlow::validate(&selection).unwrap_err();
        assert!(err
            .messages
            .iter()
            .any(|m| m.contains("điều khoản dịch vụ")));
    }

    #[test]
    fn every_message_is_collected_at_once() {
        let err = CheckoutFlow::validate(&PaymentSelection::default()).unwrap_err();
        assert_eq!(err.messages.len(), 4);
    }
}

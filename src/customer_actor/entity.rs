//! Entity trait implementation for the Customer domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`Customer`] to be managed by the generic [`crate::framework::ResourceActor`].

use super::actions::{CustomerAction, CustomerActionResult};
use super::error::CustomerError;
use crate::domain::{Customer, CustomerCreate, CustomerId, CustomerUpdate, InteractionState};
use crate::framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type CreateParams = CustomerCreate;
    type UpdateParams = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = CustomerActionResult;
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, CustomerError> {
        Ok(Self::new(id, params.state))
    }

    /// # Fields Updated
    /// - `state`: interaction state
    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        if let Some(state) = update.state {
            self.state = state;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &(),
    ) -> Result<CustomerActionResult, CustomerError> {
        match action {
            CustomerAction::CheckIn => {
                let first_contact = self.state == InteractionState::New;
                self.state = InteractionState::Interacted;
                self.messages_seen += 1;
                debug!(customer_id = %self.id, first_contact, messages_seen = self.messages_seen, "Checked in");
                Ok(CustomerActionResult::CheckIn { first_contact })
            }
        }
    }
}

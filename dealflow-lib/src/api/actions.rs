//! Staff actions: reveal, favorite, plan and status changes, deletes

use reqwest::Method;
use serde::Deserialize;
use serde::Serialize;

use crate::CrmClient;
use crate::error::Error;
use crate::model::EntityKind;
use crate::model::FamilyOfficeContact;
use crate::model::OrderStatus;
use crate::model::Plan;
use crate::model::Resource;
use crate::model::UserStatus;

/// Response of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FavoriteState {
    /// Whether the office is a favorite after the toggle.
    pub favorite: bool,
}

impl CrmClient {
    /// Reveals a contact's email and phone.
    ///
    /// `POST /api/family-office-contacts/{id}/reveal`; returns the contact
    /// with its unmasked fields.
    pub async fn reveal_contact(&self, id: &str) -> Result<FamilyOfficeContact, Error> {
        let url = self.endpoint(&[EntityKind::FamilyOfficeContact.collection(), id, "reveal"])?;
        let mut contact: FamilyOfficeContact = self.request_json(Method::POST, url, None).await?;
        contact.revealed = true;
        log::info!("Revealed contact {}", id);
        Ok(contact)
    }

    /// Toggles the favorite flag of a family office.
    ///
    /// `POST /api/family-offices/{id}/favorite`; returns the new flag.
    pub async fn toggle_favorite(&self, id: &str) -> Result<bool, Error> {
        let url = self.endpoint(&[EntityKind::FamilyOffice.collection(), id, "favorite"])?;
        let state: FavoriteState = self.request_json(Method::POST, url, None).await?;
        Ok(state.favorite)
    }

    /// Moves a user to another plan: `PATCH /api/users/{id}`.
    pub async fn change_user_plan(&self, id: &str, plan: Plan) -> Result<(), Error> {
        self.patch(EntityKind::User, id, "plan", plan).await
    }

    /// Changes a user's account status: `PATCH /api/users/{id}`.
    pub async fn change_user_status(&self, id: &str, status: UserStatus) -> Result<(), Error> {
        self.patch(EntityKind::User, id, "status", status).await
    }

    /// Changes an order's payment status: `PATCH /api/orders/{id}`.
    pub async fn change_order_status(&self, id: &str, status: OrderStatus) -> Result<(), Error> {
        self.patch(EntityKind::Order, id, "status", status).await
    }

    /// Deletes one row: `DELETE /api/{collection}/{id}`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dealflow_lib::CrmClient;
    /// use dealflow_lib::model::Integration;
    ///
    /// # async fn run(client: CrmClient) -> Result<(), dealflow_lib::error::Error> {
    /// client.delete::<Integration>("42").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn delete<T: Resource>(&self, id: &str) -> Result<(), Error> {
        self.delete_kind(T::KIND, id).await
    }

    /// Deletes one row of a collection chosen at runtime.
    pub async fn delete_kind(&self, kind: EntityKind, id: &str) -> Result<(), Error> {
        let url = self.endpoint(&[kind.collection(), id])?;
        self.request(Method::DELETE, url, None).await?;
        log::info!("Deleted {} {}", kind.label(), id);
        Ok(())
    }

    /// Sends `{ field: value }` as a partial update.
    async fn patch(
        &self,
        kind: EntityKind,
        id: &str,
        field: &str,
        value: impl Serialize,
    ) -> Result<(), Error> {
        let url = self.endpoint(&[kind.collection(), id])?;
        let mut fields = serde_json::Map::new();
        fields.insert(field.to_string(), serde_json::to_value(value)?);
        let body = serde_json::Value::Object(fields);
        log::info!("Updating {} {}: {}", kind.label(), id, body);
        self.request(Method::PATCH, url, Some(body)).await?;
        Ok(())
    }
}

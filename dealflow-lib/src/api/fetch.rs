//! Collection fetches

use reqwest::Method;
use serde::Deserialize;

use crate::CrmClient;
use crate::error::Error;
use crate::model::Company;
use crate::model::Deal;
use crate::model::FamilyOffice;
use crate::model::FamilyOfficeContact;
use crate::model::Integration;
use crate::model::Investor;
use crate::model::Order;
use crate::model::Person;
use crate::model::Resource;
use crate::model::User;

/// A collection response.
///
/// Endpoints answer either with a bare JSON array or with the array wrapped
/// in a `data` member; both decode to the same rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> Envelope<T> {
    /// Returns the rows, in response order.
    pub fn into_rows(self) -> Vec<T> {
        match self {
            Envelope::Bare(rows) => rows,
            Envelope::Wrapped { data } => data,
        }
    }
}

impl CrmClient {
    /// Fetches every row of a collection: `GET /api/{collection}`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dealflow_lib::CrmClient;
    /// use dealflow_lib::model::Investor;
    ///
    /// # async fn run(client: CrmClient) -> Result<(), dealflow_lib::error::Error> {
    /// let investors: Vec<Investor> = client.fetch::<Investor>().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch<T: Resource>(&self) -> Result<Vec<T>, Error> {
        let url = self.endpoint(&[T::KIND.collection()])?;
        let envelope: Envelope<T> = self.request_json(Method::GET, url, None).await?;
        let rows = envelope.into_rows();
        log::debug!("Fetched {} {}", rows.len(), T::KIND);
        Ok(rows)
    }

    pub async fn investors(&self) -> Result<Vec<Investor>, Error> {
        self.fetch().await
    }

    pub async fn family_offices(&self) -> Result<Vec<FamilyOffice>, Error> {
        self.fetch().await
    }

    /// Contacts arrive masked unless the caller already revealed them.
    pub async fn family_office_contacts(&self) -> Result<Vec<FamilyOfficeContact>, Error> {
        self.fetch().await
    }

    pub async fn users(&self) -> Result<Vec<User>, Error> {
        self.fetch().await
    }

    pub async fn orders(&self) -> Result<Vec<Order>, Error> {
        self.fetch().await
    }

    pub async fn deals(&self) -> Result<Vec<Deal>, Error> {
        self.fetch().await
    }

    pub async fn companies(&self) -> Result<Vec<Company>, Error> {
        self.fetch().await
    }

    pub async fn people(&self) -> Result<Vec<Person>, Error> {
        self.fetch().await
    }

    pub async fn integrations(&self) -> Result<Vec<Integration>, Error> {
        self.fetch().await
    }
}

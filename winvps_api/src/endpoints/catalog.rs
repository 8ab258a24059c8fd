use crate::{
    query::RequestOptions,
    types::{Brand, Location, Paginated, Product, Template},
    Client, Error,
};

impl Client {
    /// Fetches a page of products available for ordering.
    pub async fn get_products(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<Product>, Error> {
        self.list(&["products"], options).await
    }

    /// Fetches a page of OS templates.
    pub async fn get_templates(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<Template>, Error> {
        self.list(&["templates"], options).await
    }

    pub async fn get_locations(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<Paginated<Location>, Error> {
        self.list(&["locations"], options).await
    }

    pub async fn get_brands(&self, options: Option<&RequestOptions>) -> Result<Paginated<Brand>, Error> {
        self.list(&["brands"], options).await
    }
}

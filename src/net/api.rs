//! Typed resource accessors for the catalog API.
//!
//! Each method binds one path + verb + schema to [`Gateway::request`].
//! Authorization is left entirely to the server: a rejected call comes back as
//! an ordinary `ApiError`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{ApiResult, Gateway, Transport, json_body};
use super::types::{
    CopyProductRequest, CreateProjectRequest, CreateTodoRequest, Credentials, GroupCompany, Project, ProjectProduct,
    RegisterResponse, SharedProduct, Todo, TokenResponse,
};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const TODOS_PATH: &str = "/api/todos";
pub const GROUP_COMPANIES_PATH: &str = "/shared/group-companies";
pub const PROJECTS_PATH: &str = "/projects";

fn todo_endpoint(todo_id: u64) -> String {
    format!("{TODOS_PATH}/{todo_id}")
}

fn shared_products_endpoint(organization_id: u64) -> String {
    format!("/shared/products?organization_id={organization_id}")
}

fn projects_endpoint(organization_id: u64) -> String {
    format!("{PROJECTS_PATH}?organization_id={organization_id}")
}

fn project_products_endpoint(project_id: u64) -> String {
    format!("/projects/{project_id}/products")
}

fn copy_product_endpoint(project_id: u64) -> String {
    format!("/projects/{project_id}/products/copy")
}

fn promote_product_endpoint(project_product_id: u64) -> String {
    format!("/projects/products/{project_product_id}/promote")
}

impl<T: Transport> Gateway<T> {
    /// Exchange credentials for a bearer token via `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns the server's rejection message or a transport error.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse> {
        self.post(LOGIN_PATH, None, Some(json_body(credentials)?)).await
    }

    /// Create an account via `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns the server's rejection message or a transport error.
    pub async fn register(&self, credentials: &Credentials) -> ApiResult<RegisterResponse> {
        self.post(REGISTER_PATH, None, Some(json_body(credentials)?)).await
    }

    /// List the signed-in user's todos.
    ///
    /// # Errors
    ///
    /// Returns `ApiError`; a 401 means the session is no longer valid.
    pub async fn list_todos(&self, token: Option<&str>) -> ApiResult<Vec<Todo>> {
        self.get::<Option<Vec<Todo>>>(TODOS_PATH, token)
            .await
            .map(Option::unwrap_or_default)
    }

    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    pub async fn create_todo(&self, token: Option<&str>, content: &str) -> ApiResult<Todo> {
        let body = json_body(&CreateTodoRequest { content: content.to_owned() })?;
        self.post(TODOS_PATH, token, Some(body)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    pub async fn delete_todo(&self, token: Option<&str>, todo_id: u64) -> ApiResult<()> {
        self.delete::<serde_json::Value>(&todo_endpoint(todo_id), token)
            .await
            .map(|_| ())
    }

    /// List group companies. The catalog exposes them read-only.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    pub async fn list_group_companies(&self, token: Option<&str>) -> ApiResult<Vec<GroupCompany>> {
        self.get::<Option<Vec<GroupCompany>>>(GROUP_COMPANIES_PATH, token)
            .await
            .map(Option::unwrap_or_default)
    }

    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    pub async fn list_shared_products(&self, token: Option<&str>, organization_id: u64) -> ApiResult<Vec<SharedProduct>> {
        self.get::<Option<Vec<SharedProduct>>>(&shared_products_endpoint(organization_id), token)
            .await
            .map(Option::unwrap_or_default)
    }

    /// List every project row for the organization, soft-deleted ones included.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    pub async fn list_projects(&self, token: Option<&str>, organization_id: u64) -> ApiResult<Vec<Project>> {
        self.get::<Option<Vec<Project>>>(&projects_endpoint(organization_id), token)
            .await
            .map(Option::unwrap_or_default)
    }

    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    pub async fn create_project(&self, token: Option<&str>, name: &str) -> ApiResult<Project> {
        let body = json_body(&CreateProjectRequest { name: name.to_owned() })?;
        self.post(PROJECTS_PATH, token, Some(body)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    pub async fn list_project_products(&self, token: Option<&str>, project_id: u64) -> ApiResult<Vec<ProjectProduct>> {
        self.get::<Option<Vec<ProjectProduct>>>(&project_products_endpoint(project_id), token)
            .await
            .map(Option::unwrap_or_default)
    }

    /// Copy a shared product into a project; the new row records its lineage.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    pub async fn copy_shared_product(
        &self,
        token: Option<&str>,
        project_id: u64,
        shared_product_id: u64,
    ) -> ApiResult<ProjectProduct> {
        let body = json_body(&CopyProductRequest { shared_product_id })?;
        self.post(&copy_product_endpoint(project_id), token, Some(body)).await
    }

    /// Promote a project product to the shared catalog. The source row is kept.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on rejection or transport failure.
    pub async fn promote_project_product(&self, token: Option<&str>, project_product_id: u64) -> ApiResult<SharedProduct> {
        self.post(&promote_product_endpoint(project_product_id), token, None)
            .await
    }
}

use serde::Serialize;

/// Uniform response envelope for every resource endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: &'static str,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
}

#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub total: usize,
}

impl<T> ApiResponse<T> {
    pub fn single(data: T) -> Self {
        Self {
            data,
            message: "successful",
            status_code: 200,
            meta: None,
        }
    }

    pub fn created(data: T) -> Self {
        Self {
            data,
            message: "successful",
            status_code: 201,
            meta: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        let total = data.len();
        Self {
            data,
            message: "successful",
            status_code: 200,
            meta: Some(ListMeta { total }),
        }
    }
}

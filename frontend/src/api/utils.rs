use gloo_net::http::Request;
use gloo_storage::Storage;

use crate::auth::SESSION_TOKEN_KEY;

/// Creates a request with an Authorization header from the stored session
/// token, when one exists. There is no retry logic anywhere in this layer.
pub fn authenticated_request(method: &str, url: &str) -> gloo_net::http::RequestBuilder {
    let mut req = match method.to_uppercase().as_str() {
        "GET" => Request::get(url),
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url), // Default to GET
    };

    if let Ok(token) = gloo_storage::LocalStorage::get::<String>(SESSION_TOKEN_KEY) {
        req = req.header("Authorization", &format!("Bearer {}", token));
    }

    req
}

/// Creates a GET request with authentication
pub fn authenticated_get(url: &str) -> gloo_net::http::RequestBuilder {
    authenticated_request("GET", url)
}

/// Creates a POST request with authentication
pub fn authenticated_post(url: &str) -> gloo_net::http::RequestBuilder {
    authenticated_request("POST", url)
}

/// Creates a PUT request with authentication
pub fn authenticated_put(url: &str) -> gloo_net::http::RequestBuilder {
    authenticated_request("PUT", url)
}

/// Creates a DELETE request with authentication
pub fn authenticated_delete(url: &str) -> gloo_net::http::RequestBuilder {
    authenticated_request("DELETE", url)
}

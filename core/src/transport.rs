use crate::query::QueryParams;

/// The HTTP side of a query: signs and issues the request, decodes the reply.
///
/// The engine never looks inside `Response` or `Error`; retries, timeouts
/// and authentication all live behind this trait.
pub trait Transport {
    type Response;
    type Error;

    /// Issues a request against `resource_path` with `params` appended as the
    /// query string.
    fn issue_request(
        &self,
        resource_path: &str,
        params: &QueryParams,
    ) -> Result<Self::Response, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Response = T::Response;
    type Error = T::Error;

    fn issue_request(
        &self,
        resource_path: &str,
        params: &QueryParams,
    ) -> Result<Self::Response, Self::Error> {
        (**self).issue_request(resource_path, params)
    }
}

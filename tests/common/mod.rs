#![allow(dead_code)]

use std::cell::RefCell;

use restcriteria::prelude::*;

/// One request as seen by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub path: String,
    pub query: String,
}

/// Transport that records every request and answers with the full URL.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub requests: RefCell<Vec<Recorded>>,
}

impl Transport for RecordingTransport {
    type Response = String;
    type Error = TransportFailure;

    fn issue_request(
        &self,
        resource_path: &str,
        params: &QueryParams,
    ) -> Result<Self::Response, Self::Error> {
        self.requests.borrow_mut().push(Recorded {
            path: resource_path.to_owned(),
            query: params.to_query_string(),
        });
        Ok(params.append_to(resource_path))
    }
}

/// Transport that always fails, standing in for an unreachable service.
#[derive(Debug, Default)]
pub struct FailingTransport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure(pub u16);

impl Transport for FailingTransport {
    type Response = ();
    type Error = TransportFailure;

    fn issue_request(&self, _: &str, _: &QueryParams) -> Result<(), TransportFailure> {
        Err(TransportFailure(400))
    }
}

/// Renders a criteria the way it goes on the wire.
pub fn query_of<C: ResourceCriteria>(criteria: &C) -> String {
    criteria.to_query_params().to_query_string()
}

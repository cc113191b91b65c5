pub type RequestId = u32;

/// Carried by a request that has not been given an id yet.
pub const UNASSIGNED_REQUEST_ID: RequestId = 0;

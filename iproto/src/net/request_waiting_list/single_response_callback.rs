use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::net::connect::response::Response;
use crate::net::request_waiting_list::response_callback::{ResponseCallback, ResponseErrorType};

/// Bridges a response callback to a future: the first response delivered to
/// the callback completes the paired `SingleResponseHandle`.
pub struct SingleResponseCallback {
    sender: Mutex<Option<oneshot::Sender<Result<Response, ResponseErrorType>>>>,
}

pub struct SingleResponseHandle {
    receiver: oneshot::Receiver<Result<Response, ResponseErrorType>>,
}

#[derive(Debug)]
pub struct CallbackDroppedError {}

impl Display for CallbackDroppedError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "response callback was dropped without a response")
    }
}

impl Error for CallbackDroppedError {}

impl SingleResponseCallback {
    pub fn new() -> (Arc<SingleResponseCallback>, SingleResponseHandle) {
        let (sender, receiver) = oneshot::channel();
        let callback = Arc::new(SingleResponseCallback { sender: Mutex::new(Some(sender)) });
        return (callback, SingleResponseHandle { receiver });
    }
}

impl ResponseCallback for SingleResponseCallback {
    fn on_response(&self, response: Result<Response, ResponseErrorType>) {
        let sender = match self.sender.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(sender) = sender {
            let _ = sender.send(response);
        }
    }
}

impl SingleResponseHandle {
    pub async fn response(self) -> Result<Response, ResponseErrorType> {
        return match self.receiver.await {
            Ok(response) => response,
            Err(_) => Err(Box::new(CallbackDroppedError {})),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::fmt::{Display, Formatter};

    use bytes::Bytes;

    use crate::net::connect::response::Response;
    use crate::net::request_waiting_list::response_callback::ResponseCallback;
    use crate::net::request_waiting_list::single_response_callback::{CallbackDroppedError, SingleResponseCallback};

    #[derive(Debug)]
    struct TestError {
        message: String,
    }

    impl Display for TestError {
        fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
            write!(formatter, "{}", self.message)
        }
    }

    impl Error for TestError {}

    fn ping_response(request_id: u32) -> Response {
        let mut packet = vec![0x00, 0xff, 0, 0, 0, 0, 0, 0];
        packet.extend_from_slice(&request_id.to_le_bytes());
        return Response::decode(Bytes::from(packet)).unwrap();
    }

    #[tokio::test]
    async fn successful_response() {
        let (callback, handle) = SingleResponseCallback::new();

        callback.on_response(Ok(ping_response(8)));

        let response = handle.response().await.unwrap();
        assert_eq!(8, response.get_request_id());
    }

    #[tokio::test]
    async fn failed_response() {
        let (callback, handle) = SingleResponseCallback::new();

        callback.on_response(Err(Box::new(TestError { message: "test error".to_string() })));

        let error = handle.response().await.unwrap_err();
        assert_eq!("test error", error.downcast_ref::<TestError>().unwrap().message);
    }

    #[tokio::test]
    async fn only_the_first_response_is_delivered() {
        let (callback, handle) = SingleResponseCallback::new();

        callback.on_response(Ok(ping_response(1)));
        callback.on_response(Ok(ping_response(2)));

        assert_eq!(1, handle.response().await.unwrap().get_request_id());
    }

    #[tokio::test]
    async fn dropped_callback() {
        let (callback, handle) = SingleResponseCallback::new();

        drop(callback);

        let error = handle.response().await.unwrap_err();
        assert!(error.downcast_ref::<CallbackDroppedError>().is_some());
    }
}

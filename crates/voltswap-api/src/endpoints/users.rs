// User profile endpoints
//
// Profile read, update, and avatar upload for the signed-in rider.

use serde_json::Value;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;

impl ApiClient {
    /// Fetch the signed-in rider's profile.
    ///
    /// `GET /users/me`
    pub async fn me(&self) -> Result<Value, Error> {
        debug!("fetching own profile");
        self.get("users/me").await
    }

    /// Update the signed-in rider's profile. `body` carries only the
    /// fields to change, in wire convention.
    ///
    /// `PUT /users/me`
    pub async fn update_me(&self, body: &Value) -> Result<Value, Error> {
        debug!("updating own profile");
        self.put("users/me", body).await
    }

    /// Upload a new avatar image. The backend responds with the updated
    /// profile.
    ///
    /// `POST /users/me/avatar` (multipart, field `avatar`)
    pub async fn upload_avatar(
        &self,
        bytes: Vec<u8>,
        filename: &str,
        mime: &str,
    ) -> Result<Value, Error> {
        debug!(filename, mime, "uploading avatar");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_owned())
            .mime_str(mime)
            .map_err(Error::Network)?;
        let form = reqwest::multipart::Form::new().part("avatar", part);

        self.post_multipart("users/me/avatar", form).await
    }
}

//! The transport shared by every operation: one authenticated `GET` and its JSON decoding

use crate::Error;

/// Error payload sent by the API, either as `error` or as `message`
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: String,
}

/// Only deserializes from `false`
#[derive(Debug)]
struct Rejected;

impl<'de> serde::Deserialize<'de> for Rejected {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if bool::deserialize(deserializer)? {
            Err(serde::de::Error::custom("expected a rejection"))
        } else {
            Ok(Rejected)
        }
    }
}

/// Some endpoints answer with a successful status and `{ "success": false, "error": "..." }`
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum Response<T> {
    Rejected {
        #[allow(unused)]
        success: Rejected,
        #[serde(default, alias = "message")]
        error: Option<String>,
    },
    Success(T),
}

impl<T> Response<T> {
    fn payload(self, status: reqwest::StatusCode) -> Result<T, Error> {
        match self {
            Self::Rejected { error, .. } => Err(Error::Protocol {
                status: status.as_u16(),
                message: error.unwrap_or_else(|| "request rejected by the server".into()),
            }),
            Self::Success(payload) => Ok(payload),
        }
    }
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|err| err.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        })
}

async fn read_response<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    let body = res.text().await?;
    if !status.is_success() {
        return Err(Error::from_status(status, error_message(status, &body)));
    }
    serde_json::from_str::<Response<T>>(&body)
        .map_err(Error::from)
        .and_then(|res| res.payload(status))
}

impl crate::Client {
    fn build_url(&self, segments: &[&str]) -> Result<reqwest::Url, Error> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|err| Error::InvalidArgument(format!("invalid base url: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidArgument("base url cannot have a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[tracing::instrument(name = "get", skip(self, params))]
    pub(crate) async fn get_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        segments: &[&str],
        params: P,
    ) -> Result<T, Error> {
        let uri = self.build_url(segments)?;
        tracing::debug!("calling {uri}");
        let res = self
            .inner
            .get(uri)
            .bearer_auth(self.credentials.token())
            .query(&params)
            .send()
            .await?;
        read_response(res).await
    }
}

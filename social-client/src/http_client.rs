use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{SocialClientError, SocialClientResult};

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Clone)]
/// Низкоуровневый JSON-транспорт поверх `reqwest`.
pub(crate) struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub(crate) fn new(base_url: impl Into<String>) -> SocialClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> SocialClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .error
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        SocialClientError::from_http_status(status, Some(message))
    }

    async fn execute(&self, request: RequestBuilder) -> SocialClientResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(SocialClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response)
    }

    async fn execute_json<TRes: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> SocialClientResult<TRes> {
        self.execute(request)
            .await?
            .json::<TRes>()
            .await
            .map_err(SocialClientError::from_reqwest)
    }

    pub(crate) async fn get<TRes: DeserializeOwned>(&self, path: &str) -> SocialClientResult<TRes> {
        self.execute_json(self.client.get(self.endpoint(path))).await
    }

    pub(crate) async fn get_with_query<TQuery, TRes>(
        &self,
        path: &str,
        query: &TQuery,
    ) -> SocialClientResult<TRes>
    where
        TQuery: Serialize + ?Sized,
        TRes: DeserializeOwned,
    {
        let request = self.client.get(self.endpoint(path)).query(query);
        self.execute_json(request).await
    }

    /// универсальный helper для отправки запросов с json-payload
    pub(crate) async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
    ) -> SocialClientResult<TRes>
    where
        TReq: Serialize + ?Sized,
        TRes: DeserializeOwned,
    {
        let request = self.client.request(method, self.endpoint(path)).json(body);
        self.execute_json(request).await
    }

    /// DELETE-запрос; тело ответа (`{"message": ...}`) не нужно вызывающему.
    pub(crate) async fn delete(&self, path: &str) -> SocialClientResult<()> {
        self.execute(self.client.delete(self.endpoint(path)))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("http://localhost:8080/").expect("client must build");
        let full = client.endpoint("/posts");
        assert_eq!(full, "http://localhost:8080/posts");
    }
}

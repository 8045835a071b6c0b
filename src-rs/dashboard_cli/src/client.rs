use reqwest::blocking::Client;

use crate::models::{BoardRow, HistoryEntry, SelectRequest, SelectResponse, StatusInfo};

pub struct HTTPClient {
    pub base_url: String,
    client: Client,
}

impl HTTPClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client"),
        }
    }

    pub fn status(&self) -> Result<StatusInfo, String> {
        let url = format!("{}/status", self.base_url);
        let value = self.get_value(&url)?;
        serde_json::from_value::<StatusInfo>(value).map_err(|err| err.to_string())
    }

    pub fn roster(&self) -> Result<Vec<String>, String> {
        let url = format!("{}/roster", self.base_url);
        let value = self.get_value(&url)?;
        Ok(name_list(&value, "moderators"))
    }

    pub fn edit_roster(&self, action: &str, name: &str) -> Result<Vec<String>, String> {
        let url = format!("{}/roster", self.base_url);
        let body = serde_json::json!({"action": action, "name": name});
        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()
            .map_err(|err| err.to_string())?;
        let value = check(resp)?;
        Ok(name_list(&value, "moderators"))
    }

    pub fn select(&self, req: SelectRequest) -> Result<SelectResponse, String> {
        let url = format!("{}/select", self.base_url);
        let resp = self
            .client
            .post(url)
            .json(&req)
            .send()
            .map_err(|err| err.to_string())?;
        if resp.status().is_success() {
            resp.json::<SelectResponse>().map_err(|err| err.to_string())
        } else {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            Err(format!("http {}: {}", status.as_u16(), body))
        }
    }

    pub fn history(&self, limit: usize) -> Result<Vec<HistoryEntry>, String> {
        let url = format!("{}/history?limit={}", self.base_url, limit);
        let value = self.get_value(&url)?;
        let records = value
            .get("records")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        let mut out = Vec::new();
        for item in records {
            if let Ok(entry) = serde_json::from_value::<HistoryEntry>(item) {
                out.push(entry);
            }
        }
        Ok(out)
    }

    pub fn leaderboard(&self, range: &str) -> Result<Vec<BoardRow>, String> {
        let url = format!("{}/leaderboard?range={}", self.base_url, range);
        let value = self.get_value(&url)?;
        let rows = value
            .get("rows")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        let mut out = Vec::new();
        for item in rows {
            if let Ok(row) = serde_json::from_value::<BoardRow>(item) {
                out.push(row);
            }
        }
        Ok(out)
    }

    fn get_value(&self, url: &str) -> Result<serde_json::Value, String> {
        let resp = self.client.get(url).send().map_err(|err| err.to_string())?;
        check(resp)
    }
}

fn check(resp: reqwest::blocking::Response) -> Result<serde_json::Value, String> {
    if resp.status().is_success() {
        let value = resp
            .json::<serde_json::Value>()
            .map_err(|err| err.to_string())?;
        if let Some(err) = value.get("error").and_then(|v| v.as_str()) {
            return Err(err.to_string());
        }
        Ok(value)
    } else {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        Err(format!("http {}: {}", status.as_u16(), body))
    }
}

fn name_list(value: &serde_json::Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(|name| name.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

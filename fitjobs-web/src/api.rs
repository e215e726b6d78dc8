use fitjobs_common::Job;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server returned status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Job listing payload: either a bare array or `{ "jobs": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum JobsPayload {
    List(Vec<Job>),
    Envelope { jobs: Vec<Job> },
}

/// Fetch all job postings from the listing endpoint
pub async fn fetch_jobs(url: &str) -> Result<Vec<Job>, ApiError> {
    debug!("Fetching jobs from {url}");
    let resp = reqwest::get(url)
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse_jobs(&body)
}

/// Decode a listing response body
pub fn parse_jobs(body: &str) -> Result<Vec<Job>, ApiError> {
    let payload: JobsPayload =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(match payload {
        JobsPayload::List(jobs) => jobs,
        JobsPayload::Envelope { jobs } => jobs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = r#"{"id": "1", "title": "Pilates Instructor", "company": "Core Studio",
        "description": "Mat and reformer", "sportType": "Pilates", "location": "Denver, CO",
        "salary": "$35/hr", "type": "Part-time", "experience": "Entry-level",
        "postedDate": "2024-05-01", "requirements": ["PMA certification"]}"#;

    #[test]
    fn test_parse_bare_array() {
        let jobs = parse_jobs(&format!("[{JOB}]")).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company, "Core Studio");
        assert_eq!(jobs[0].requirements, vec!["PMA certification"]);
    }

    #[test]
    fn test_parse_envelope() {
        let jobs = parse_jobs(&format!(r#"{{"jobs": [{JOB}, {JOB}]}}"#)).unwrap();
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_jobs(r#"{"error": "down"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }
}

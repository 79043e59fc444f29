use std::{collections::BTreeMap, sync::Arc};

use druid::im::Vector;
use log::debug;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::{
    data::{movie::StoredMovie, Movie, MovieDraft},
    error::Error,
};

pub struct WebApi {
    agent: Agent,
    base_url: String,
}

impl WebApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            agent: Agent::config_builder().build().into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn movies_url(&self) -> String {
        format!("{}/movies.json", self.base_url)
    }

    /// Send a GET request and return the deserialized JSON body.
    fn load<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let mut response = self.agent.get(url).call()?;
        response
            .body_mut()
            .read_json()
            .map_err(|err| Error::StoreError(err.to_string()))
    }
}

/// Store endpoints.
impl WebApi {
    /// Fetches the whole collection.  The store hands back an object keyed
    /// by record id, or `null` when the collection is empty.
    pub fn get_movies(&self) -> Result<Vector<Movie>, Error> {
        let stored: Option<BTreeMap<String, StoredMovie>> = self.load(&self.movies_url())?;
        Ok(Movie::from_store(stored.unwrap_or_default()))
    }

    /// Appends one record to the collection.  The store assigns the id and
    /// acknowledges with a small JSON body we have no use for.
    pub fn save_movie(&self, draft: &MovieDraft) -> Result<(), Error> {
        let mut response = self.agent.post(&self.movies_url()).send_json(draft)?;
        let ack = response
            .body_mut()
            .read_to_string()
            .map_err(|err| Error::StoreError(err.to_string()))?;
        debug!("store acknowledged save: {ack}");
        Ok(())
    }
}

static GLOBAL_WEBAPI: OnceCell<Arc<WebApi>> = OnceCell::new();

/// Global instance.
impl WebApi {
    pub fn install_as_global(self) {
        GLOBAL_WEBAPI
            .set(Arc::new(self))
            .map_err(|_| "Cannot install more than once")
            .unwrap()
    }

    pub fn global() -> Arc<Self> {
        GLOBAL_WEBAPI.get().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::{TcpListener, TcpStream},
        sync::mpsc,
        thread,
    };

    use super::*;

    /// One-shot HTTP stub standing in for the remote store.  Answers a
    /// single request with the given status line and body, and hands the raw
    /// request text back through the channel.
    fn stub_store(status_line: &str, body: &str) -> (WebApi, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();
        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
            let _ = tx.send(request);
        });
        (WebApi::new(&format!("http://{addr}")), rx)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut head = Vec::new();
        let mut byte = [0u8; 1];
        while !head.ends_with(b"\r\n\r\n") {
            stream.read_exact(&mut byte).unwrap();
            head.push(byte[0]);
        }
        let head = String::from_utf8(head).unwrap();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().unwrap())
            })
            .unwrap_or(0);
        let mut body = vec![0u8; content_length];
        stream.read_exact(&mut body).unwrap();
        head + &String::from_utf8(body).unwrap()
    }

    #[test]
    fn get_movies_parses_the_collection() {
        let (api, _rx) = stub_store(
            "200 OK",
            r#"{"a":{"title":"T1","openingText":"O1","releaseDate":"2020-01-01"}}"#,
        );

        let movies = api.get_movies().unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(&*movies[0].id, "a");
        assert_eq!(&*movies[0].title, "T1");
    }

    #[test]
    fn get_movies_treats_empty_and_null_stores_alike() {
        let (api, _rx) = stub_store("200 OK", "{}");
        assert!(api.get_movies().unwrap().is_empty());

        let (api, _rx) = stub_store("200 OK", "null");
        assert!(api.get_movies().unwrap().is_empty());
    }

    #[test]
    fn get_movies_maps_http_failure_to_fixed_message() {
        let (api, _rx) = stub_store("500 Internal Server Error", r#"{"error":"details"}"#);

        let err = api.get_movies().unwrap_err();
        assert_eq!(err.to_string(), "Something went wrong!");
    }

    #[test]
    fn get_movies_surfaces_transport_failure_text() {
        // Bind and immediately drop the listener so the connection fails.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = WebApi::new(&format!("http://{addr}"));
        let err = api.get_movies().unwrap_err();
        assert_ne!(err.to_string(), "Something went wrong!");
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn save_movie_posts_the_draft_as_json() {
        let (api, rx) = stub_store("200 OK", r#"{"name":"-NewId"}"#);
        let draft = MovieDraft {
            title: "X".to_string(),
            opening_text: "Y".to_string(),
            release_date: "2021-05-05".to_string(),
        };

        api.save_movie(&draft).unwrap();

        let request = rx.recv().unwrap();
        let (head, body) = request.split_once("\r\n\r\n").unwrap();
        assert!(head.starts_with("POST /movies.json HTTP/1.1"));
        assert!(head
            .lines()
            .any(|line| line.to_ascii_lowercase().starts_with("content-type:")
                && line.to_ascii_lowercase().contains("application/json")));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(body).unwrap(),
            serde_json::json!({
                "title": "X",
                "openingText": "Y",
                "releaseDate": "2021-05-05",
            })
        );
    }

    #[test]
    fn save_movie_reports_store_failure_to_the_caller() {
        let (api, _rx) = stub_store("401 Unauthorized", "{}");
        let draft = MovieDraft::default();

        assert!(api.save_movie(&draft).is_err());
    }
}

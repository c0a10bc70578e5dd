use chrono::NaiveDate;
use rpresence::errors::RemoteFailure;
use rpresence::models::{PersonDraft, RecordId, Status};
use rpresence::remote::{HttpGateway, PresenceDraft, RemoteGateway};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Serve exactly one HTTP response and hand back the raw request.
fn one_shot(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut head = String::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                content_length = v.trim().parse().unwrap();
            }
            head.push_str(&line);
            if line == "\r\n" || line.is_empty() {
                break;
            }
        }
        let mut body_buf = vec![0u8; content_length];
        reader.read_exact(&mut body_buf).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        head + &String::from_utf8_lossy(&body_buf)
    });

    (base, handle)
}

fn gateway(base: &str) -> HttpGateway {
    HttpGateway::new(base, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_refused_connection_is_a_remote_failure() {
    let gw = HttpGateway::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let err = gw.list_people().unwrap_err();
    assert!(matches!(
        err,
        RemoteFailure::Network(_) | RemoteFailure::Timeout(_)
    ));
}

#[test]
fn test_create_person_posts_json_and_reads_numeric_id() {
    let (base, server) = one_shot(
        "201 Created",
        r#"{"id":42,"nom":"Dupont","prenom":"Jean","email":"jean@corp.fr","poste":null}"#,
    );

    let draft = PersonDraft::new("Dupont", "Jean").with_email("jean@corp.fr");
    let person = gateway(&base).create_person(&draft).unwrap();

    assert_eq!(person.id, RecordId::remote("42"));
    assert_eq!(person.email, "jean@corp.fr");
    assert_eq!(person.poste, "");
    assert_eq!(person.avatar_color, "#4F46E5");

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /tables/personnes "));
    assert!(request.contains(r#""prenom":"Jean""#));
}

#[test]
fn test_server_error_is_a_status_failure() {
    let (base, server) = one_shot("500 Internal Server Error", r#"{"error":"boom"}"#);

    let draft = PresenceDraft {
        personne_id: "42".into(),
        date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        statut: Status::Present,
        notes: String::new(),
    };
    let err = gateway(&base).update_presence("7", &draft).unwrap_err();
    assert!(matches!(err, RemoteFailure::Status { status: 500, .. }));

    let request = server.join().unwrap();
    assert!(request.starts_with("PUT /tables/presences/7 "));
    assert!(request.contains(r#""date":"2026-10-19""#));
    assert!(request.contains(r#""statut":"present""#));
}

#[test]
fn test_list_presences_unwraps_envelope_with_limit() {
    let (base, server) = one_shot(
        "200 OK",
        r#"{"data":[{"id":"p1","personne_id":42,"date":"2026-10-19","statut":"conge","notes":"ski"}],"total":1}"#,
    );

    let rows = gateway(&base).list_presences().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].personne_id, RecordId::remote("42"));
    assert_eq!(rows[0].statut, Status::Conge);
    assert_eq!(rows[0].notes, "ski");

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /tables/presences?limit=10000 "));
}

#[test]
fn test_undecodable_body_is_a_remote_failure() {
    let (base, server) = one_shot("200 OK", "<html>maintenance</html>");
    let err = gateway(&base).list_people().unwrap_err();
    assert!(matches!(err, RemoteFailure::Decode(_)));
    server.join().unwrap();
}

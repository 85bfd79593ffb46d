//! In-process stand-in for the hosted store, speaking just enough of its REST
//! dialect for the route tests: `select`, `order`, `limit`, `eq.` and
//! `not.is.null` filters, `Prefer: return=representation` on insert.

use crate::store::Table;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Map, Value};
use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    net::TcpListener,
    sync::Mutex,
};

#[derive(Default)]
struct State {
    tables: HashMap<String, Vec<Value>>,
    seq: u64,
    deletes: Vec<String>,
    failing: HashSet<String>,
}

pub struct FakeStore {
    pub url: String,
    state: web::Data<Mutex<State>>,
}

impl FakeStore {
    pub const KEY: &'static str = "test-anon-key";
    pub const UNAUTHORIZED_BODY: &'static str = r#"{"message":"Invalid API key"}"#;
    pub const FAILURE_BODY: &'static str = r#"{"message":"delete failed"}"#;

    pub async fn start() -> Self {
        let state = web::Data::new(Mutex::new(State::default()));
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let data = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(handle))
        })
        .workers(1)
        .disable_signals()
        .listen(listener)
        .unwrap()
        .run();
        actix_web::rt::spawn(server);

        Self { url, state }
    }

    pub fn rows(&self, table: Table) -> Vec<Value> {
        let state = self.state.lock().unwrap();
        state.tables.get(table.as_ref()).cloned().unwrap_or_default()
    }

    /// Every DELETE received, as `table?query`, in arrival order.
    pub fn deletes(&self) -> Vec<String> {
        self.state.lock().unwrap().deletes.clone()
    }

    pub fn fail_deletes_on(&self, table: Table) {
        self.state.lock().unwrap().failing.insert(table.to_string());
    }
}

/// A local URL nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|h| h.to_str().ok())
}

fn matches(row: &Value, filters: &[(String, String)]) -> bool {
    filters.iter().all(|(col, op)| {
        let cell = row.get(col).unwrap_or(&Value::Null);
        if op == "not.is.null" {
            !cell.is_null()
        } else if let Some(expected) = op.strip_prefix("eq.") {
            match cell {
                Value::String(s) => s == expected,
                Value::Null => false,
                other => other.to_string() == expected,
            }
        } else {
            false
        }
    })
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

async fn handle(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<Mutex<State>>,
) -> HttpResponse {
    let bearer = format!("Bearer {}", FakeStore::KEY);
    if header(&req, "apikey") != Some(FakeStore::KEY)
        || header(&req, "authorization") != Some(bearer.as_str())
    {
        return HttpResponse::Unauthorized().body(FakeStore::UNAUTHORIZED_BODY);
    }

    let Some(table) = req.path().strip_prefix("/rest/v1/") else {
        return HttpResponse::NotFound().finish();
    };
    let table = table.to_string();

    let params = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default();
    let mut select = None;
    let mut order = None;
    let mut limit = None;
    let mut filters = Vec::new();
    for (k, v) in params {
        match k.as_str() {
            "select" => select = Some(v),
            "order" => order = Some(v),
            "limit" => limit = v.parse::<usize>().ok(),
            _ => filters.push((k, v)),
        }
    }

    let mut state = state.lock().unwrap();
    match req.method().as_str() {
        "GET" => {
            let mut rows: Vec<Value> = state
                .tables
                .get(&table)
                .map(|rows| rows.iter().filter(|r| matches(r, &filters)).cloned().collect())
                .unwrap_or_default();

            if let Some(order) = order {
                let (col, dir) = order.rsplit_once('.').unwrap_or((order.as_str(), "asc"));
                rows.sort_by(|a, b| {
                    let ord = compare(
                        a.get(col).unwrap_or(&Value::Null),
                        b.get(col).unwrap_or(&Value::Null),
                    );
                    if dir == "desc" { ord.reverse() } else { ord }
                });
            }
            if let Some(n) = limit {
                rows.truncate(n);
            }
            if let Some(select) = select {
                let cols: Vec<&str> = select.split(',').collect();
                rows = rows
                    .into_iter()
                    .map(|row| {
                        let projected: Map<String, Value> = cols
                            .iter()
                            .filter_map(|c| row.get(*c).map(|v| (c.to_string(), v.clone())))
                            .collect();
                        Value::Object(projected)
                    })
                    .collect();
            }
            HttpResponse::Ok().json(rows)
        }
        "POST" => {
            let payload: Value = match serde_json::from_slice(&body) {
                Ok(v) => v,
                Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
            };
            let incoming = match payload {
                Value::Array(rows) => rows,
                row => vec![row],
            };

            let mut inserted = Vec::new();
            for mut row in incoming {
                state.seq += 1;
                let seq = state.seq;
                if let Some(obj) = row.as_object_mut() {
                    obj.insert("created_at".into(), Value::from(seq));
                    if table == "attendance" {
                        obj.insert("id".into(), Value::from(seq));
                    }
                }
                inserted.push(row);
            }
            state
                .tables
                .entry(table)
                .or_default()
                .extend(inserted.iter().cloned());

            if header(&req, "prefer") == Some("return=representation") {
                HttpResponse::Created().json(inserted)
            } else {
                HttpResponse::Created().finish()
            }
        }
        "DELETE" => {
            state
                .deletes
                .push(format!("{table}?{}", req.query_string()));
            if state.failing.contains(&table) {
                return HttpResponse::InternalServerError().body(FakeStore::FAILURE_BODY);
            }
            if let Some(rows) = state.tables.get_mut(&table) {
                rows.retain(|r| !matches(r, &filters));
            }
            HttpResponse::NoContent().finish()
        }
        _ => HttpResponse::MethodNotAllowed().finish(),
    }
}

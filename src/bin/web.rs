//! Single binary web server: the tournament engine behind a small REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//! Optional env: ENTRIES_FILE — a .json array or .csv file seeding the entry
//! pool at startup.

use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get, post, put,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::io;
use std::path::Path as FsPath;
use std::sync::RwLock;
use uuid::Uuid;
use vote_tournament_web::{reduce, set_entries, Action, Entry, TournamentState};

/// In-memory state: the single canonical snapshot. All actions go through
/// the write lock, so reads always observe a consistent value.
type AppState = Data<RwLock<TournamentState>>;

/// Session key holding the caller's voter id.
const VOTER_ID_KEY: &str = "voter_id";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct SetEntriesBody {
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
struct VoteBody {
    entry: Entry,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "vote-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Apply one action to the canonical snapshot and return the new snapshot.
/// This is the single-writer path: lock, reduce, store, respond.
fn apply(state: &AppState, action: Action) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::debug!("applying action: {:?}", action);
    *g = reduce(&g, &action);
    HttpResponse::Ok().json(&*g)
}

/// Voter id from the cookie session, minted on first use.
fn voter_id(session: &Session) -> String {
    if let Ok(Some(id)) = session.get::<String>(VOTER_ID_KEY) {
        return id;
    }
    let id = Uuid::new_v4().to_string();
    let _ = session.insert(VOTER_ID_KEY, &id);
    id
}

/// Current snapshot (the observer surface: clients poll this).
#[get("/api/state")]
async fn api_get_state(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&*g)
}

/// Seed (or replace) the entry pool. Intended for tournament setup.
#[put("/api/entries")]
async fn api_set_entries(state: AppState, body: Json<SetEntriesBody>) -> HttpResponse {
    log::info!("seeding {} entries", body.entries.len());
    apply(
        &state,
        Action::SetEntries {
            entries: body.into_inner().entries,
        },
    )
}

/// Resolve the active round and advance to the next one (or declare the
/// tournament winner).
#[post("/api/next")]
async fn api_next(state: AppState) -> HttpResponse {
    apply(&state, Action::Next)
}

/// Cast (or correct) the caller's ballot for one entry of the active pair.
/// The voter id comes from the cookie session; one counted ballot per voter.
#[post("/api/vote")]
async fn api_vote(state: AppState, session: Session, body: Json<VoteBody>) -> HttpResponse {
    let voter = voter_id(&session);
    apply(
        &state,
        Action::Vote {
            entry: body.into_inner().entry,
            voter,
        },
    )
}

/// Reset to the initial entries and start a fresh tournament; round numbers
/// continue from where the last tournament stopped.
#[post("/api/restart")]
async fn api_restart(state: AppState) -> HttpResponse {
    apply(&state, Action::Restart)
}

/// Load an entry list from a .json array or a .csv file (first field of each
/// record). Used once at startup when ENTRIES_FILE is set.
fn load_entries(path: &str) -> io::Result<Vec<Entry>> {
    let is_csv = FsPath::new(path)
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(io::Error::other)?;
        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record.map_err(io::Error::other)?;
            if let Some(field) = record.get(0) {
                let field = field.trim();
                if !field.is_empty() {
                    entries.push(field.to_string());
                }
            }
        }
        Ok(entries)
    } else {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(io::Error::other)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let mut initial = TournamentState::new();
    if let Ok(path) = std::env::var("ENTRIES_FILE") {
        let entries = load_entries(&path)?;
        log::info!("Loaded {} entries from {}", entries.len(), path);
        initial = set_entries(&initial, entries);
    }

    let state = Data::new(RwLock::new(initial));

    // Sessions only carry a random voter id, so a per-boot key is fine:
    // restarting the server hands voters fresh ids.
    let session_key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                session_key.clone(),
            ))
            .service(api_health)
            .service(favicon)
            .service(api_get_state)
            .service(api_set_entries)
            .service(api_next)
            .service(api_vote)
            .service(api_restart)
    })
    .bind(bind)?
    .run()
    .await
}

//! HTML Pages

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use tracing::error;

use crate::AppState;
use storage::StorageRecord;

/// Render the index page enumerating all records.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    match state.repository.list_all().await {
        Ok(records) => Ok(Html(render_index(&records))),
        Err(e) => {
            error!("Rendering index failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn render_index(records: &[StorageRecord]) -> String {
    use std::fmt::Write;

    let mut rows = String::new();
    for record in records {
        let _ = writeln!(
            rows,
            "      <tr><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td></tr>",
            record.id,
            escape(&record.company),
            record.capacity_used,
            escape(&record.error_status),
        );
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
           <title>Storage Telemetry</title>\n\
           <style>\n\
             body {{ font-family: sans-serif; margin: 2rem; }}\n\
             table {{ border-collapse: collapse; }}\n\
             th, td {{ border: 1px solid #999; padding: 0.4rem 0.8rem; }}\n\
             th {{ background: #eee; }}\n\
           </style>\n\
         </head>\n\
         <body>\n\
           <h1>Storage Systems</h1>\n\
           <table>\n\
             <tr><th>ID</th><th>Company</th><th>Capacity Used (%)</th><th>Error Status</th></tr>\n\
       {rows}\
           </table>\n\
         </body>\n\
         </html>\n"
    )
}

/// Minimal escaping for HTML element content.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

use std::path::Path;

use anyhow::Context;

use crate::models::SessionTurn;

/// Loads a session transcript, dispatching on the file extension:
/// `.json` is a JSON array of turns, anything else is CSV with a
/// `sender,text` header.
pub fn load(path: &Path) -> anyhow::Result<Vec<SessionTurn>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => from_json(path),
        _ => from_csv(path),
    }
}

pub fn from_csv(path: &Path) -> anyhow::Result<Vec<SessionTurn>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open transcript {}", path.display()))?;

    let mut turns = Vec::new();
    for result in reader.deserialize::<SessionTurn>() {
        let turn = result
            .with_context(|| format!("invalid transcript row in {}", path.display()))?;
        turns.push(turn);
    }

    Ok(turns)
}

pub fn from_json(path: &Path) -> anyhow::Result<Vec<SessionTurn>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read transcript {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("invalid transcript JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TurnSender;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("objection-coach-test-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_transcript_loads_in_order() {
        let path = temp_file(
            "turns.csv",
            "sender,text\nprospect,that's too expensive\nrep,I hear you on budget\n",
        );
        let turns = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].sender, TurnSender::Prospect);
        assert_eq!(turns[1].sender, TurnSender::Rep);
        assert_eq!(turns[1].text, "I hear you on budget");
    }

    #[test]
    fn json_transcript_loads() {
        let path = temp_file(
            "turns.json",
            r#"[{"sender":"prospect","text":"not interested"},{"sender":"rep","text":"fair enough"}]"#,
        );
        let turns = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].sender, TurnSender::Prospect);
    }

    #[test]
    fn unknown_sender_is_a_load_error() {
        let path = temp_file("bad.csv", "sender,text\nmoderator,hello\n");
        let result = load(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load(Path::new("/nonexistent/session.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/session.csv"));
    }
}

//! Database schema definitions.

/// SQLite schema for the NeuroCare store.
///
/// Both tables are append-only logs. The batch is idempotent: running it
/// against an existing database neither fails nor touches existing rows.
pub const SQLITE_SCHEMA: &str = r"
-- Emergency alerts table
CREATE TABLE IF NOT EXISTS emergencies (
    id INTEGER PRIMARY KEY,
    user_id TEXT NOT NULL,
    message TEXT NOT NULL,
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
    status TEXT DEFAULT 'pending'
);

-- Conversation turns table
CREATE TABLE IF NOT EXISTS conversations (
    id INTEGER PRIMARY KEY,
    user_id TEXT NOT NULL,
    speaker TEXT NOT NULL,
    text TEXT NOT NULL,
    language TEXT NOT NULL,
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
);
";

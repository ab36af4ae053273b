use sqlx::any::AnyKind;

/// SQL for the `scores` table, spelled the way each backend expects it.
#[derive(Debug)]
pub struct Statements {
    pub create_table: &'static str,
    pub create_index: Option<&'static str>,
    pub insert: String,
    pub select_by_token: String,
}

impl Statements {
    pub fn for_kind(kind: AnyKind) -> Self {
        let (create_table, create_index) = match kind {
            AnyKind::Sqlite => (
                "CREATE TABLE IF NOT EXISTS scores (\
                    id INTEGER PRIMARY KEY AUTOINCREMENT, \
                    token TEXT NOT NULL, \
                    name TEXT NOT NULL, \
                    score BIGINT NOT NULL)",
                Some("CREATE INDEX IF NOT EXISTS scores_token_idx ON scores (token)"),
            ),
            AnyKind::Postgres => (
                "CREATE TABLE IF NOT EXISTS scores (\
                    id BIGSERIAL PRIMARY KEY, \
                    token TEXT NOT NULL, \
                    name TEXT NOT NULL, \
                    score BIGINT NOT NULL)",
                Some("CREATE INDEX IF NOT EXISTS scores_token_idx ON scores (token)"),
            ),
            // Neither supports `CREATE INDEX IF NOT EXISTS`, so the index lives in the table definition
            AnyKind::MySql => (
                "CREATE TABLE IF NOT EXISTS scores (\
                    id BIGINT AUTO_INCREMENT PRIMARY KEY, \
                    token VARCHAR(255) NOT NULL, \
                    name TEXT NOT NULL, \
                    score BIGINT NOT NULL, \
                    INDEX scores_token_idx (token))",
                None,
            ),
            AnyKind::Mssql => (
                "IF OBJECT_ID(N'scores', N'U') IS NULL \
                CREATE TABLE scores (\
                    id BIGINT IDENTITY(1,1) PRIMARY KEY, \
                    token NVARCHAR(255) NOT NULL, \
                    name NVARCHAR(MAX) NOT NULL, \
                    score BIGINT NOT NULL, \
                    INDEX scores_token_idx (token))",
                None,
            ),
        };

        let insert = format!(
            "INSERT INTO scores (token, name, score) VALUES ({}, {}, {})",
            placeholder(kind, 1),
            placeholder(kind, 2),
            placeholder(kind, 3),
        );
        let select_by_token = format!(
            "SELECT id, token, name, score FROM scores WHERE token = {} ORDER BY id",
            placeholder(kind, 1),
        );

        Self {
            create_table,
            create_index,
            insert,
            select_by_token,
        }
    }
}

/// Bind parameter syntax for the `index`-th (1-based) argument.
fn placeholder(kind: AnyKind, index: usize) -> String {
    match kind {
        AnyKind::Postgres => format!("${}", index),
        AnyKind::Mssql => format!("@p{}", index),
        AnyKind::MySql | AnyKind::Sqlite => "?".to_owned(),
    }
}

//! Declarative test builder.
//!
//! The builder queues tables and fixture records, then creates them all on a fresh in-memory
//! SQLite database during `build()`.

use entity::sea_orm_active_enums::ChampionshipFormat;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// # Example
///
/// ```no_run
/// use entity::sea_orm_active_enums::ChampionshipFormat;
/// use padel_test_utils::TestBuilder;
///
/// # async fn example() -> Result<(), padel_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_league_tables()
///     .with_mock_championship(ChampionshipFormat::Liga)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_league_tables: bool,
    championships: Vec<ChampionshipFormat>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_league_tables: false,
            championships: Vec::new(),
        }
    }

    /// Add every championship table to the test database.
    ///
    /// Creates PadelChampionship, PadelCourt, PadelTeam, PadelMatch, PadelMatchSet and
    /// PadelStanding, in foreign key order, before any table added with `with_table`.
    pub fn with_league_tables(mut self) -> Self {
        self.include_league_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; referenced tables must come first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock championship of the given format during `build()`.
    ///
    /// Championships are inserted in call order, so the first one gets ID 1.
    pub fn with_mock_championship(mut self, format: ChampionshipFormat) -> Self {
        self.championships.push(format);
        self
    }

    /// Build the test context.
    ///
    /// Creates the configured tables, then inserts the queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_league_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PadelChampionship),
                schema.create_table_from_entity(entity::prelude::PadelCourt),
                schema.create_table_from_entity(entity::prelude::PadelTeam),
                schema.create_table_from_entity(entity::prelude::PadelMatch),
                schema.create_table_from_entity(entity::prelude::PadelMatchSet),
                schema.create_table_from_entity(entity::prelude::PadelStanding),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        for format in self.championships {
            context.championship().insert_mock_championship(format).await?;
        }

        Ok(context)
    }
}

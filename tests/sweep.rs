use std::{cell::RefCell, rc::Rc};

use ksat_sweep::{
    config::{ClauseRange, StepRange, SweepConfig, TableConfig, TraceConfig},
    driver::{Dispatch, Driver, SweepSummary, TraceSummary},
    generic::random::MinimalPCG32,
    metrics::{Collaborator, Metric, Metrics},
    network::NetworkBuilder,
    structures::instance::{Instance, InstanceParams},
    table::{Cell, Column, DelimitedTable, FixedWidthTable, Table},
    types::err::{CollaboratorError, ErrorKind, ParameterError, SampleError, TableError},
};
use rand::SeedableRng;

fn seeded(seed: u64) -> MinimalPCG32 {
    MinimalPCG32::from_seed(seed.to_le_bytes())
}

/// A table which keeps rows in memory.
#[derive(Default)]
struct VecTable {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
    flushes: usize,
    closed: bool,
}

impl VecTable {
    fn with_columns(columns: Vec<Column>) -> Self {
        VecTable {
            columns,
            ..Default::default()
        }
    }
}

impl Table for VecTable {
    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn write_row(&mut self, row: &[Cell]) -> Result<(), TableError> {
        if self.closed {
            return Err(TableError::Closed);
        }
        self.rows.push(row.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TableError> {
        self.flushes += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), TableError> {
        self.closed = true;
        Ok(())
    }
}

/// Reports the count of atoms of an instance, twice, and fails on the given call.
#[derive(Default)]
struct AtomCount {
    calls: usize,
    fail_on: Option<usize>,
}

impl Collaborator for AtomCount {
    fn metric_names(&self) -> &[&'static str] {
        &["num_nodes", "num_edges"]
    }

    fn measure(&mut self, instance: &Instance) -> Result<Metrics, CollaboratorError> {
        self.calls += 1;
        if self.fail_on == Some(self.calls) {
            return Err(CollaboratorError::Other("refused".to_string()));
        }

        let n = instance.atom_count() as Metric;
        Ok(Metrics::from(vec![n, n]))
    }
}

/// A sweep of the triples (n, k, m) for n in `n_min..n_max` and k in `k_min..k_max`, with a fixed m.
fn small_sweep(k: (u32, u32), n: (u32, u32), m: u32, samples: usize) -> SweepConfig {
    let mut config = SweepConfig::default();
    config.k = StepRange::new(k.0, k.1, 1);
    config.n = StepRange::new(n.0, n.1, 1);
    config.m = ClauseRange::Fixed(StepRange::new(m, m + 1, 1));
    config.samples.set(samples).unwrap();
    config
}

mod sweep {
    use super::*;

    #[test]
    fn constant_metrics() {
        let mut driver = Driver::new(AtomCount::default(), seeded(1));
        let mut table = VecTable::with_columns(driver.sweep_columns(10, 17));

        let config = small_sweep((3, 4), (20, 21), 60, 1000);
        let summary = driver.sweep(&config, &mut table).unwrap();

        assert_eq!(
            summary,
            SweepSummary {
                triples: 1,
                samples: 1000
            }
        );
        assert_eq!(table.rows, vec![vec![20, 3, 60, 20, 20, 20, 20]]);
        assert!(table.closed);
        assert_eq!(driver.collaborator().calls, 1000);
    }

    #[test]
    fn rows_follow_triples() {
        let mut driver = Driver::new(AtomCount::default(), seeded(2));
        let mut table = VecTable::with_columns(driver.sweep_columns(10, 17));

        let mut config = small_sweep((3, 5), (5, 7), 10, 3);
        config.m = ClauseRange::PerAtom {
            min_ratio: 2,
            max_ratio: 4,
            steps: 2,
        };
        assert!(driver.sweep(&config, &mut table).is_ok());

        let triples = table
            .rows
            .iter()
            .map(|row| (row[0], row[1], row[2]))
            .collect::<Vec<_>>();

        assert_eq!(
            triples,
            vec![
                (5, 3, 10),
                (5, 3, 15),
                (6, 3, 12),
                (6, 3, 18),
                (5, 4, 10),
                (5, 4, 15),
                (6, 4, 12),
                (6, 4, 18),
            ]
        );
    }

    #[test]
    fn dispatches() {
        let dispatches = Rc::new(RefCell::new(Vec::default()));
        let sink = dispatches.clone();

        let mut driver = Driver::new(AtomCount::default(), seeded(3))
            .with_dispatcher(move |dispatch| sink.borrow_mut().push(dispatch));
        let mut table = VecTable::with_columns(driver.sweep_columns(10, 17));

        let config = small_sweep((2, 3), (4, 6), 8, 20);
        assert!(driver.sweep(&config, &mut table).is_ok());

        let dispatches = dispatches.borrow();
        assert_eq!(dispatches.len(), 4);
        assert_eq!(
            dispatches[0],
            Dispatch::Triple {
                params: InstanceParams::new(4, 2, 8).unwrap(),
                index: 0,
                total: 2,
            }
        );
        assert_eq!(dispatches[1], Dispatch::Row(vec![4, 2, 8, 4, 4, 4, 4]));
        assert_eq!(dispatches[3], Dispatch::Row(table.rows[1].clone()));
    }

    #[test]
    fn collaborator_failure() {
        let collaborator = AtomCount {
            calls: 0,
            fail_on: Some(8),
        };
        let mut driver = Driver::new(collaborator, seeded(4));
        let mut table = VecTable::with_columns(driver.sweep_columns(10, 17));

        let config = small_sweep((3, 4), (10, 12), 20, 5);
        let result = driver.sweep(&config, &mut table);

        match result {
            Err(ErrorKind::Sample(failure)) => {
                assert_eq!(failure.params, InstanceParams::new(11, 3, 20).unwrap());
                assert_eq!(failure.index, 2);
                assert_eq!(
                    failure.error,
                    SampleError::Collaborator(CollaboratorError::Other("refused".to_string()))
                );
            }
            _ => panic!("expected a sample failure"),
        }

        assert_eq!(table.rows.len(), 1);
        assert!(table.closed);
    }

    #[test]
    fn invalid_triples_are_found_first() {
        let mut driver = Driver::new(AtomCount::default(), seeded(5));
        let mut table = VecTable::with_columns(driver.sweep_columns(10, 17));

        // Every triple with k = 3 is fine, though k = 4 exceeds n = 3.
        let config = small_sweep((3, 5), (3, 4), 10, 5);
        assert_eq!(
            driver.sweep(&config, &mut table),
            Err(ErrorKind::Parameter(ParameterError::ClauseExceedsAtoms {
                n: 3,
                k: 4
            }))
        );

        assert_eq!(driver.collaborator().calls, 0);
        assert!(table.rows.is_empty());
        assert!(table.closed);
    }

    #[test]
    fn schema_mismatch() {
        let mut driver = Driver::new(AtomCount::default(), seeded(6));
        let mut table = VecTable::with_columns(driver.trace_columns(17));

        let config = small_sweep((3, 4), (10, 11), 20, 5);
        assert_eq!(
            driver.sweep(&config, &mut table),
            Err(ErrorKind::Table(TableError::ColumnCount {
                expected: 7,
                found: 2
            }))
        );
        assert_eq!(driver.collaborator().calls, 0);
    }

    #[test]
    fn fixed_width_end_to_end() {
        let directory = tempfile::tempdir().unwrap();
        let table_config = TableConfig {
            directory: directory.path().to_path_buf(),
            label: Some("sweep".to_string()),
            ..Default::default()
        };

        let mut driver = Driver::new(NetworkBuilder::default(), seeded(7));
        let columns = driver.sweep_columns(table_config.parameter_width, table_config.metric_width);
        let mut table = FixedWidthTable::from_config(&table_config, columns).unwrap();

        let mut config = small_sweep((3, 4), (10, 20), 0, 20);
        config.n = StepRange::new(10, 20, 5);
        config.m = ClauseRange::Fixed(StepRange::new(20, 40, 10));

        let summary = driver.sweep(&config, &mut table).unwrap();
        assert_eq!(summary.triples, 4);
        assert_eq!(table.file_count(), 1);

        let written = std::fs::read_to_string(table.last_path().unwrap()).unwrap();
        let mut lines = written.lines();

        let header = lines.next().unwrap().split_whitespace().collect::<Vec<_>>();
        assert_eq!(
            header,
            vec!["N", "K", "M", "mean_num_nodes", "max_num_nodes", "mean_num_edges", "max_num_edges"]
        );

        let rows = lines
            .map(|line| {
                line.split_whitespace()
                    .map(|cell| cell.parse::<i64>().unwrap())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        assert_eq!(rows.len(), 4);
        for row in rows {
            assert_eq!(row.len(), 7);
            assert!(row[3] <= row[4]);
            assert!(row[5] <= row[6]);
            // The constant and inputs are always present.
            assert!(row[3] > row[0]);
        }
    }
}

mod trace {
    use super::*;

    fn trace_config(samples: usize, batch: usize) -> TraceConfig {
        let mut config = TraceConfig::default();
        config.samples.set(samples).unwrap();
        config.batch.set(batch).unwrap();
        config
    }

    #[test]
    fn batches() {
        let dispatches = Rc::new(RefCell::new(Vec::default()));
        let sink = dispatches.clone();

        let mut driver = Driver::new(AtomCount::default(), seeded(8))
            .with_dispatcher(move |dispatch| sink.borrow_mut().push(dispatch));
        let mut table = VecTable::with_columns(driver.trace_columns(17));

        let summary = driver.trace(&trace_config(25, 10), &mut table).unwrap();
        assert_eq!(
            summary,
            TraceSummary {
                samples: 25,
                batches: 3
            }
        );

        assert_eq!(table.rows.len(), 25);
        assert!(table.rows.iter().all(|row| row == &vec![20, 20]));
        assert_eq!(table.flushes, 3);
        assert!(table.closed);

        let progress = dispatches
            .borrow()
            .iter()
            .filter_map(|dispatch| match dispatch {
                Dispatch::Progress { samples, total } => Some((*samples, *total)),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(progress, vec![(10, 25), (20, 25), (25, 25)]);
    }

    #[test]
    fn zero_batch() {
        let mut driver = Driver::new(AtomCount::default(), seeded(9));
        let mut table = VecTable::with_columns(driver.trace_columns(17));

        let mut config = trace_config(25, 10);
        config.batch.value = 0;

        assert!(matches!(
            driver.trace(&config, &mut table),
            Err(ErrorKind::Config(_))
        ));
        assert_eq!(driver.collaborator().calls, 0);
        assert!(table.closed);
    }

    #[test]
    fn failure_keeps_earlier_batches() {
        let collaborator = AtomCount {
            calls: 0,
            fail_on: Some(15),
        };
        let mut driver = Driver::new(collaborator, seeded(10));
        let mut table = VecTable::with_columns(driver.trace_columns(17));

        match driver.trace(&trace_config(25, 10), &mut table) {
            Err(ErrorKind::Sample(failure)) => assert_eq!(failure.index, 14),
            _ => panic!("expected a sample failure"),
        }

        assert_eq!(table.rows.len(), 14);
        assert_eq!(table.flushes, 1);
        assert!(table.closed);
    }

    #[test]
    fn delimited_end_to_end() {
        let directory = tempfile::tempdir().unwrap();
        let table_config = TableConfig {
            directory: directory.path().to_path_buf(),
            ..Default::default()
        };

        let mut driver = Driver::new(NetworkBuilder::default(), seeded(11));
        let columns = driver.trace_columns(table_config.metric_width);
        let mut table = DelimitedTable::from_config(&table_config, columns).unwrap();

        let summary = driver.trace(&trace_config(50, 20), &mut table).unwrap();
        assert_eq!(summary.batches, 3);

        let written = std::fs::read_to_string(table.path()).unwrap();
        let lines = written.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 51);
        assert_eq!(lines[0], "num_nodes,num_edges");

        for line in &lines[1..] {
            let cells = line
                .split(',')
                .map(|cell| cell.parse::<usize>().unwrap())
                .collect::<Vec<_>>();
            assert_eq!(cells.len(), 2);
            // Each gate has two fanins, and the output is an edge.
            let gates = cells[0] - 20 - 1;
            assert_eq!(cells[1], 2 * gates + 1);
        }
    }

    #[test]
    fn same_seed_same_trace() {
        let run = |seed| {
            let mut driver = Driver::new(NetworkBuilder::default(), seeded(seed));
            let mut table = VecTable::with_columns(driver.trace_columns(17));
            assert!(driver.trace(&trace_config(30, 7), &mut table).is_ok());
            table.rows
        };

        assert_eq!(run(12), run(12));
    }
}

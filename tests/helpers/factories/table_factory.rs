use crate::engine::table::Table;

pub struct TableFactory {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableFactory {
    pub fn new() -> Self {
        Self {
            columns: vec!["Country".into(), "Amount".into()],
            rows: Vec::new(),
        }
    }

    /// Country A,A,B,C with Amount 10,20,5,3.
    pub fn countries() -> Self {
        Self::new()
            .with_row(&["A", "10"])
            .with_row(&["A", "20"])
            .with_row(&["B", "5"])
            .with_row(&["C", "3"])
    }

    /// Seven sales records over four countries plus one without a country.
    pub fn sales() -> Self {
        Self::new()
            .with_columns(&["Country", "Customer", "Amount", "Units", "Product"])
            .with_row(&["A", "c1", "10", "1", "p1"])
            .with_row(&["A", "c2", "20", "2", "p2"])
            .with_row(&["B", "c1", "5", "1", "p1"])
            .with_row(&["C", "c3", "3", "", "p3"])
            .with_row(&["B", "c4", "7", "3", "p1"])
            .with_row(&["D", "c2", "1", "1", "p2"])
            .with_row(&["", "c5", "4", "2", "p4"])
    }

    pub fn with_columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn to_csv(&self) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.columns).unwrap();
        for row in &self.rows {
            writer.write_record(row).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    pub fn create(self) -> Table {
        Table::from_csv_reader(self.to_csv().as_bytes()).expect("factory table must parse")
    }
}

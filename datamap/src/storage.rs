use log::debug;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Params, Row};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

pub struct Storage {
    connection: Connection,
}

/// Row of a table decoded into JSON values, addressed by column name.
pub struct Entry {
    columns: Rc<HashMap<String, usize>>,
    values: Vec<Value>,
}

impl Entry {
    pub fn get<'a, T: Deserialize<'a>>(&'a self, index: &str) -> Result<T, serde_json::Error> {
        let index = self
            .columns
            .get(index)
            .ok_or_else(|| serde_json::Error::custom(format!("column {index} not found")))?;
        T::deserialize(&self.values[*index])
    }

    pub fn get_or<'a, T: Deserialize<'a>>(
        &'a self,
        index: &str,
        default: T,
    ) -> Result<T, serde_json::Error> {
        match self.columns.get(index) {
            Some(position) if !self.values[*position].is_null() => {
                T::deserialize(&self.values[*position])
            }
            _ => Ok(default),
        }
    }

    pub fn get_string(&self, index: &str) -> Result<&str, serde_json::Error> {
        self.get(index)
    }

}

pub fn table_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        Connection::open(path.as_ref()).map(|connection| Storage { connection })
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(|connection| Storage { connection })
    }

    pub fn execute_script(&self, script: &str) -> rusqlite::Result<()> {
        self.connection.execute_batch(script)
    }

    pub fn has_table<T>(&self) -> rusqlite::Result<bool> {
        let mut statement = self
            .connection
            .prepare("select count(*) from sqlite_master where type = 'table' and name = ?")?;
        let count: i64 = statement.query_row([table_name::<T>()], |row| row.get(0))?;
        Ok(count > 0)
    }

    pub fn fetch_all<T>(&self) -> rusqlite::Result<Vec<Entry>> {
        self.query::<T, _>([], "")
    }

    fn query<T, P: Params>(&self, params: P, where_clause: &str) -> rusqlite::Result<Vec<Entry>> {
        let table = table_name::<T>();
        let mut statement = self
            .connection
            .prepare(&format!("select * from {} {}", table, where_clause))?;
        let mut columns: HashMap<String, usize> = Default::default();
        for (index, column) in statement.column_names().iter().enumerate() {
            columns.insert(column.to_string(), index);
        }
        let columns_count = columns.len();
        let columns = Rc::new(columns);
        let mut rows = statement.query(params)?;
        let mut entries = vec![];
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(columns_count);
            for i in 0..columns_count {
                let value = match row.get_ref(i)? {
                    ValueRef::Null => Value::Null,
                    ValueRef::Integer(data) => Value::Number(Number::from(data)),
                    ValueRef::Real(data) => Number::from_f64(data)
                        .map(Value::Number)
                        .unwrap_or(Value::Null),
                    ValueRef::Text(ptr) => {
                        if ptr.first() == Some(&b'[') || ptr.first() == Some(&b'{') {
                            serde_json::from_slice(ptr).unwrap_or_else(|_| {
                                Value::String(String::from_utf8_lossy(ptr).to_string())
                            })
                        } else {
                            Value::String(String::from_utf8_lossy(ptr).to_string())
                        }
                    }
                    ValueRef::Blob(ptr) => serde_json::from_slice(ptr).unwrap_or(Value::Null),
                };
                values.push(value);
            }
            entries.push(Entry {
                columns: columns.clone(),
                values,
            });
        }
        debug!("Fetch {} rows from {}", entries.len(), table);
        Ok(entries)
    }

    /// Maps every row of the table named after `T` through `map`.
    /// The first mapping error stops the scan.
    pub fn find_all<T, E, M>(&self, map: M) -> Result<Vec<T>, E>
    where
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        self.query_map::<T, E, _, M>([], "", map)
    }

    fn query_map<T, E, P: Params, M>(
        &self,
        params: P,
        where_clause: &str,
        mut map: M,
    ) -> Result<Vec<T>, E>
    where
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let table = table_name::<T>();
        let mut statement = self
            .connection
            .prepare(&format!("select * from {} {}", table, where_clause))?;
        let mut rows = statement.query(params)?;
        let mut values = vec![];
        while let Some(row) = rows.next()? {
            values.push(map(row)?);
        }
        Ok(values)
    }
}

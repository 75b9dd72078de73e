/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! a minimal in-memory table for GMT data records: ordered named columns with numeric or text cells.
//! GMT exchanges tables as tab separated text, which is what [`Table::write_tsv`] produces and
//! [`read_tsv`] consumes

use std::{fmt, fs::File, io::{Read, Write}, path::Path};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use crate::errors::{Result, invalid_input, op_failed};

#[derive(Debug,Clone,PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl Value {
    /// parse a single output field. Empty fields and NaN (GMT's no-data value) are [`Value::Missing`],
    /// anything else that does not parse as a number is kept as text
    pub fn parse (s: &str)->Value {
        let s = s.trim();
        if s.is_empty() {
            Value::Missing
        } else if let Ok(x) = s.parse::<f64>() {
            if x.is_nan() { Value::Missing } else { Value::Number(x) }
        } else {
            Value::Text( s.to_string())
        }
    }

    pub fn as_f64 (&self)->Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            _ => None
        }
    }

    pub fn as_str (&self)->Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None
        }
    }

    pub fn is_missing (&self)->bool { matches!( self, Value::Missing) }
}

impl fmt::Display for Value {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            Value::Number(x) => write!( f, "{x}"),
            Value::Text(s) => f.write_str(s),
            Value::Missing => f.write_str("NaN")
        }
    }
}

impl From<f64> for Value {
    fn from (x: f64)->Self { Value::Number(x) }
}

impl From<&str> for Value {
    fn from (s: &str)->Self { Value::Text( s.to_string()) }
}

impl From<String> for Value {
    fn from (s: String)->Self { Value::Text(s) }
}

/// row oriented table. Each row has exactly one cell per column
#[derive(Debug,Clone,PartialEq,Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new<S: ToString> (columns: &[S])->Self {
        Table { columns: columns.iter().map( |c| c.to_string()).collect(), rows: Vec::new() }
    }

    /// create a numeric table from column names and rows of numbers
    pub fn from_rows<S: ToString> (columns: &[S], rows: &[Vec<f64>])->Result<Self> {
        let mut table = Table::new( columns);
        for row in rows {
            table.push_row( row.iter().map( |x| Value::Number(*x)).collect())?;
        }
        Ok(table)
    }

    pub fn push_row (&mut self, row: Vec<Value>)->Result<()> {
        if row.len() != self.columns.len() {
            return Err( invalid_input!("row has {} values but table has {} columns", row.len(), self.columns.len()))
        }
        self.rows.push( row);
        Ok(())
    }

    pub fn column_names (&self)->&[String] { &self.columns }

    pub fn n_columns (&self)->usize { self.columns.len() }

    pub fn n_rows (&self)->usize { self.rows.len() }

    pub fn is_empty (&self)->bool { self.rows.is_empty() }

    pub fn rows (&self)->&[Vec<Value>] { &self.rows }

    pub fn column_index (&self, name: &str)->Option<usize> {
        self.columns.iter().position( |c| c == name)
    }

    pub fn get (&self, row: usize, col: usize)->Option<&Value> {
        self.rows.get(row).and_then( |r| r.get(col))
    }

    pub fn column (&self, name: &str)->Option<Vec<&Value>> {
        self.column_index(name).map( |i| self.rows.iter().map( |r| &r[i]).collect())
    }

    /// numeric values of column `name`. Non-numeric cells are returned as NaN
    pub fn column_f64 (&self, name: &str)->Option<Vec<f64>> {
        self.column_index(name).map( |i| self.rows.iter().map( |r| r[i].as_f64().unwrap_or(f64::NAN)).collect())
    }

    /// write rows as tab separated records without a header line, which is GMT's native ASCII table format
    pub fn write_tsv<W: Write> (&self, writer: W)->Result<()> {
        let mut w = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quote_style(QuoteStyle::Never) // GMT does not know about quoting
            .from_writer(writer);

        for row in &self.rows {
            w.write_record( row.iter().map( |v| v.to_string()))?;
        }
        w.flush()?;
        Ok(())
    }

    /// the table as tab separated text with a header line
    pub fn to_tsv_string (&self)->Result<String> {
        let mut buf: Vec<u8> = Vec::new();
        {
            let mut w = WriterBuilder::new().delimiter(b'\t').quote_style(QuoteStyle::Never).from_writer( &mut buf);
            w.write_record( &self.columns)?;
            w.flush()?;
        }
        self.write_tsv( &mut buf)?;
        String::from_utf8(buf).map_err( |e| op_failed!("non-utf8 table output: {}", e))
    }
}

/// read GMT tab separated output into a table with the given column names.
/// Segment headers ('>') and comment lines ('#') are skipped, records that are shorter than `column_names`
/// are padded with [`Value::Missing`]. Records with more fields than columns are rejected
pub fn read_tsv<R: Read, S: ToString> (reader: R, column_names: &[S])->Result<Table> {
    let mut table = Table::new( column_names);
    let n_cols = table.n_columns();

    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(reader);

    for res in rdr.records() {
        let rec = res?;
        if rec.get(0).map( |f| f.starts_with('>')).unwrap_or(false) { continue } // segment header

        if rec.len() > n_cols {
            let line = rec.position().map( |p| p.line()).unwrap_or(0);
            return Err( op_failed!("record at line {} has {} fields but only {} columns are expected", line, rec.len(), n_cols))
        }

        let mut row: Vec<Value> = rec.iter().map( Value::parse).collect();
        row.resize( n_cols, Value::Missing);
        table.push_row( row)?;
    }

    Ok(table)
}

/// read a tab separated data table whose column names are either given by a header line or, if `has_header`
/// is false, generated from the column position (`col0`, `col1`, ..). The number of columns is set by the
/// header or the first record
pub fn read_tsv_table<R: Read> (reader: R, has_header: bool)->Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut table: Option<Table> = None;

    for res in rdr.records() {
        let rec = res?;
        if rec.get(0).map( |f| f.starts_with('>')).unwrap_or(false) { continue }

        match table.as_mut() {
            Some(t) => {
                let mut row: Vec<Value> = rec.iter().map( Value::parse).collect();
                if row.len() < t.n_columns() { row.resize( t.n_columns(), Value::Missing) }
                t.push_row( row)?;
            }
            None => {
                if has_header {
                    let names: Vec<&str> = rec.iter().map( |f| f.trim()).collect();
                    table = Some( Table::new( &names));
                } else {
                    let names: Vec<String> = (0..rec.len()).map( |i| format!("col{i}")).collect();
                    let mut t = Table::new( &names);
                    t.push_row( rec.iter().map( Value::parse).collect())?;
                    table = Some(t);
                }
            }
        }
    }

    table.ok_or_else( || op_failed!("no data records"))
}

pub fn read_tsv_file<P: AsRef<Path>, S: ToString> (path: P, column_names: &[S])->Result<Table> {
    let file = File::open( path.as_ref())?;
    read_tsv( file, column_names)
}

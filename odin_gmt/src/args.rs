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

//! generic GMT option list construction.
//! GMT modules take single character flags with their values directly appended (`-A45`, `-E10/20`, `-N`).
//! Each option record of this crate knows the flag and serialization rule of its fields and turns them
//! into an [`ArgList`], which renders the argument string that is passed on to the module call

use std::fmt::{self, Display};

use crate::errors::{Result, invalid_input};

/// a single option token, i.e. flag character plus optional value
#[derive(Debug,Clone,PartialEq)]
pub struct GmtArg {
    pub flag: char,
    pub value: Option<String>,
}

impl Display for GmtArg {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match &self.value {
            Some(v) => write!( f, "-{}{}", self.flag, v),
            None => write!( f, "-{}", self.flag)
        }
    }
}

/// the options of one module call. There is at most one token per flag - setting a flag again replaces the
/// previous value
#[derive(Debug,Clone,Default)]
pub struct ArgList {
    args: Vec<GmtArg>,
}

impl ArgList {
    pub fn new()->Self { ArgList { args: Vec::new() } }

    fn set (&mut self, flag: char, value: Option<String>) {
        if let Some(arg) = self.args.iter_mut().find( |a| a.flag == flag) {
            arg.value = value;
        } else {
            self.args.push( GmtArg { flag, value });
        }
    }

    /// presence-only flag such as `-N`. Nothing is added if `is_set` is false
    pub fn flag (&mut self, flag: char, is_set: bool)->&mut Self {
        if is_set { self.set( flag, None) }
        self
    }

    /// flag with a single value, e.g. `-A45`
    pub fn scalar<T: Display> (&mut self, flag: char, value: Option<T>)->&mut Self {
        if let Some(v) = value { self.set( flag, Some( v.to_string())) }
        self
    }

    /// flag with a slash-joined value sequence, e.g. `-E10/20`
    pub fn sequence<T: Display> (&mut self, flag: char, values: Option<&[T]>)->&mut Self {
        if let Some(vs) = values { self.set( flag, Some( join_sequence(vs))) }
        self
    }

    pub fn contains (&self, flag: char)->bool {
        self.args.iter().any( |a| a.flag == flag)
    }

    pub fn get (&self, flag: char)->Option<&GmtArg> {
        self.args.iter().find( |a| a.flag == flag)
    }

    pub fn value_of (&self, flag: char)->Option<&str> {
        self.get(flag).and_then( |a| a.value.as_deref())
    }

    pub fn len (&self)->usize { self.args.len() }

    pub fn is_empty (&self)->bool { self.args.is_empty() }

    /// the space separated option string, ordered by flag character (upper case before lower case)
    pub fn to_arg_string (&self)->String {
        let mut args: Vec<&GmtArg> = self.args.iter().collect();
        args.sort_by_key( |a| a.flag);
        args.iter().map( |a| a.to_string()).collect::<Vec<String>>().join(" ")
    }
}

impl Display for ArgList {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        f.write_str( &self.to_arg_string())
    }
}

/// implemented by the option records of the module adapters
pub trait GmtOptions {
    fn to_args (&self)->ArgList;
}

/// render a value sequence the way GMT expects it: `v0/v1/..`
pub fn join_sequence<T: Display> (values: &[T])->String {
    values.iter().map( |v| v.to_string()).collect::<Vec<String>>().join("/")
}

/// parse a `a/b` coordinate pair such as a center or endpoint
pub fn parse_pair (s: &str)->Result<[f64;2]> {
    match s.split_once('/') {
        Some((a,b)) => {
            let a = a.trim().parse::<f64>().map_err( |_| invalid_input!("not a number: '{}'", a))?;
            let b = b.trim().parse::<f64>().map_err( |_| invalid_input!("not a number: '{}'", b))?;
            Ok([a,b])
        }
        None => Err( invalid_input!("expected '<a>/<b>', got '{}'", s))
    }
}

/// GMT verbosity levels (`-V<level>`)
#[derive(Debug,Clone,Copy,PartialEq,Eq,serde::Serialize,serde::Deserialize,clap::ValueEnum)]
pub enum Verbosity {
    Quiet,
    Error,
    Warning,
    Timing,
    Information,
    Compatibility,
    Debug,
}

impl Verbosity {
    pub fn level_char (&self)->char {
        match *self {
            Verbosity::Quiet => 'q',
            Verbosity::Error => 'e',
            Verbosity::Warning => 'w',
            Verbosity::Timing => 't',
            Verbosity::Information => 'i',
            Verbosity::Compatibility => 'c',
            Verbosity::Debug => 'd',
        }
    }
}

impl Display for Verbosity {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "{}", self.level_char())
    }
}

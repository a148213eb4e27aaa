//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::{BinaryOrder, NaryOrder, SearchPolicy};

/// Binary and n-ary tree traversals on built-in sample trees
#[derive(Parser, Debug)]
#[command(name = "treewalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, env = "TREEWALK_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Traverse the sample binary tree (10 / 9 2 / 1 3 4 6)
    Binary {
        /// Visiting order
        #[arg(short, long, value_enum, default_value = "all")]
        order: BinaryOrderArg,
    },

    /// Traverse the sample n-ary tree (Beverages)
    Nary {
        /// Visiting order
        #[arg(short, long, value_enum, default_value = "all")]
        order: NaryOrderArg,
    },

    /// Search the sample n-ary tree in level order
    Search {
        /// Value to look for, e.g. "Soda"
        value: String,
        /// Which match wins when values repeat (default: from config)
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,
    },

    /// Render both sample trees
    Show,

    /// Enqueue values, then dequeue them in FIFO order
    Queue {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Push values onto a stack and show it top first
    Stack {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Build a singly linked list from values
    List {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Compute base^exp recursively
    Power {
        #[arg(allow_negative_numbers = true)]
        base: i64,
        exp: u32,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOrderArg {
    In,
    Pre,
    Post,
    All,
}

impl BinaryOrderArg {
    pub fn orders(self) -> Vec<BinaryOrder> {
        match self {
            BinaryOrderArg::In => vec![BinaryOrder::InOrder],
            BinaryOrderArg::Pre => vec![BinaryOrder::PreOrder],
            BinaryOrderArg::Post => vec![BinaryOrder::PostOrder],
            BinaryOrderArg::All => BinaryOrder::ALL.to_vec(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NaryOrderArg {
    DepthFirst,
    LevelOrder,
    All,
}

impl NaryOrderArg {
    pub fn orders(self) -> Vec<NaryOrder> {
        match self {
            NaryOrderArg::DepthFirst => vec![NaryOrder::DepthFirst],
            NaryOrderArg::LevelOrder => vec![NaryOrder::LevelOrder],
            NaryOrderArg::All => NaryOrder::ALL.to_vec(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    First,
    Last,
}

impl From<PolicyArg> for SearchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::First => SearchPolicy::First,
            PolicyArg::Last => SearchPolicy::Last,
        }
    }
}

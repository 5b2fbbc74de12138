use std::io::{self, BufRead, Write};

use log::{debug, info};

pub mod prompt;

use crate::{
    core::{commands::Builtin, config::ShellConfig, env::PathTable},
    error::ShellError,
    highlight::Highlighter,
    input::{tokenize, LineReader},
    path::resolve,
    process::{Command, Executor, ProcessExecutor},
};

/// Outcome of one prompt/read/execute round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
    EndOfInput,
}

pub struct Shell<E: Executor = ProcessExecutor> {
    config: ShellConfig,
    paths: PathTable,
    executor: E,
    highlighter: Highlighter,
}

impl Shell<ProcessExecutor> {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        config.validate()?;
        let highlighter = Highlighter::new();
        let paths = load_path_table(&config, &highlighter, &mut io::stderr())?;
        Ok(Self::with_parts(
            config,
            paths,
            ProcessExecutor::new(),
            highlighter,
        ))
    }
}

impl<E: Executor> Shell<E> {
    pub fn with_parts(
        config: ShellConfig,
        paths: PathTable,
        executor: E,
        highlighter: Highlighter,
    ) -> Self {
        Shell {
            config,
            paths,
            executor,
            highlighter,
        }
    }

    pub fn paths(&self) -> &PathTable {
        &self.paths
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn run(&self) -> Result<(), ShellError> {
        let stdin = io::stdin();
        self.run_with(stdin.lock(), &mut io::stdout(), &mut io::stderr())
    }

    /// Loops until `exit` or end of input, then prints the farewell.
    pub fn run_with<R, O, W>(&self, input: R, out: &mut O, err: &mut W) -> Result<(), ShellError>
    where
        R: BufRead,
        O: Write,
        W: Write,
    {
        let mut reader = LineReader::new(input, self.config.max_line_len);

        loop {
            match self.step(&mut reader, out, err)? {
                Step::Continue => continue,
                Step::Exit => break,
                Step::EndOfInput => {
                    writeln!(out)?;
                    break;
                }
            }
        }

        writeln!(out, "{}", self.config.farewell)?;
        out.flush()?;
        info!("shell terminated");
        Ok(())
    }

    pub fn step<R, O, W>(
        &self,
        reader: &mut LineReader<R>,
        out: &mut O,
        err: &mut W,
    ) -> Result<Step, ShellError>
    where
        R: BufRead,
        O: Write,
        W: Write,
    {
        self.prompt(out)?;

        let Some(line) = reader.read_line()? else {
            debug!("end of input");
            return Ok(Step::EndOfInput);
        };

        match self.dispatch(&line) {
            Ok(step) => Ok(step),
            Err(e) if e.is_recoverable() => {
                writeln!(err, "{}", self.highlighter.highlight_error(&e.to_string()))?;
                Ok(Step::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn prompt<O: Write>(&self, out: &mut O) -> io::Result<()> {
        let text = prompt::render(
            prompt::hostname(),
            &self.config.fallback_hostname,
            &self.config.prompt_suffix,
        );
        write!(out, "{}", text)?;
        out.flush()
    }

    fn dispatch(&self, line: &str) -> Result<Step, ShellError> {
        let argv = tokenize(line, self.config.max_tokens)?;
        let Some(name) = argv.program() else {
            return Ok(Step::Continue);
        };

        if let Some(Builtin::Exit) = Builtin::lookup(name) {
            return Ok(Step::Exit);
        }

        let path = resolve(&argv, &self.paths)?;
        let status = self.executor.execute(Command::new(path, argv))?;
        debug!("command finished with {}", status);
        Ok(Step::Continue)
    }
}

/// Reads the search table from the environment. An unset variable or an
/// oversized table leaves the shell with an empty table and a warning.
pub fn load_path_table<W: Write>(
    config: &ShellConfig,
    highlighter: &Highlighter,
    err: &mut W,
) -> io::Result<PathTable> {
    match PathTable::from_env(&config.path_var, config.max_path_entries) {
        Ok(table) => {
            info!("loaded {} search directories", table.len());
            Ok(table)
        }
        Err(e) => {
            let message = format!("warning: {}; only absolute paths can be run", e);
            writeln!(err, "{}", highlighter.highlight_warning(&message))?;
            Ok(PathTable::empty())
        }
    }
}

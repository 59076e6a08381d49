use std::io;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_status_cmd::{UpdateBookStatusCommand, UpdateBookStatusCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

const COMMANDS: [&str; 7] = [
    "help:          Отображает список команд",
    "add:           Добавить книгу",
    "delete:        Удалить книгу",
    "find:          Найти книгу",
    "show:          Отобразить все книги",
    "update_status: Изменить статус книги",
    "exit:          Выход",
];

enum Flow {
    Continue,
    Exit,
}

// A failed command is reported and the session goes on; a broken console is fatal.
enum ConsoleError {
    Io(io::Error),
    Command(CommandError),
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        ConsoleError::Command(err)
    }
}

type ConsoleResult<T> = Result<T, ConsoleError>;

// ConsoleController is the interactive shell over the catalog commands.
pub struct ConsoleController {
    catalog_service: Box<dyn CatalogService>,
}

impl ConsoleController {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }

    /// Runs the command loop until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        write_command_list(&mut output)?;
        loop {
            let choice = match read_prompt(&mut input, &mut output, "Введите команду: ")? {
                Some(choice) => choice,
                None => break,
            };
            debug!(command = choice.trim(), "dispatching");
            match self.dispatch(choice.trim(), &mut input, &mut output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(ConsoleError::Command(err)) => {
                    debug!(command = choice.trim(), error = %err, "command failed");
                    writeln!(output, "Ошибка: {}", err)?;
                }
                Err(ConsoleError::Io(err)) => return Err(err),
            }
        }
        output.flush()
    }

    fn dispatch<R: BufRead, W: Write>(&self, choice: &str, input: &mut R, output: &mut W) -> ConsoleResult<Flow> {
        let svc = self.catalog_service.as_ref();
        match choice {
            "add" => {
                let title = require_prompt(input, output, "Название книги: ")?;
                let author = require_prompt(input, output, "Автор книги: ")?;
                let year = parse_number::<i32>(&require_prompt(input, output, "Год издания: ")?)?;
                let res = AddBookCommand::new(svc)
                    .execute(AddBookCommandRequest::new(title.as_str(), author.as_str(), year))?;
                writeln!(output, "Книга сохранена с ID: {}", res.book_id)?;
            }
            "delete" => {
                let book_id = parse_number::<u64>(&require_prompt(input, output, "ID книги: ")?)?;
                RemoveBookCommand::new(svc).execute(RemoveBookCommandRequest::new(book_id))?;
                writeln!(output, "Книга удалена")?;
            }
            "find" => {
                let book_id = parse_number::<u64>(&require_prompt(input, output, "ID книги: ")?)?;
                let res = GetBookCommand::new(svc).execute(GetBookCommandRequest::new(book_id))?;
                write_book(output, &res.book)?;
            }
            "show" => {
                let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default())?;
                if res.books.is_empty() {
                    writeln!(output, "Книги отсутствуют")?;
                }
                for book in &res.books {
                    write_book(output, book)?;
                }
            }
            "update_status" => {
                let book_id = parse_number::<u64>(&require_prompt(input, output, "ID книги: ")?)?;
                let res = UpdateBookStatusCommand::new(svc)
                    .execute(UpdateBookStatusCommandRequest::new(book_id))?;
                writeln!(output, "Новый статус: {}", res.status)?;
            }
            "help" => {
                write_command_list(output)?;
            }
            "exit" => {
                return Ok(Flow::Exit);
            }
            _ => {
                writeln!(output, "Неверная команда.")?;
            }
        }
        Ok(Flow::Continue)
    }
}

fn write_command_list<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\nСписок доступных команд:")?;
    for command in COMMANDS {
        writeln!(output, "{}", command)?;
    }
    Ok(())
}

fn write_book<W: Write>(output: &mut W, book: &BookDto) -> io::Result<()> {
    writeln!(output, "ID: {}\nАвтор: {}\nНазвание книги: {}\nГод: {}\nСтатус: {}\n",
             book.id, book.author, book.title, book.year, book.status)
}

// None means the input is exhausted.
fn read_prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn require_prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> ConsoleResult<String> {
    read_prompt(input, output, label)?
        .ok_or_else(|| ConsoleError::Command(CommandError::input("ввод прерван")))
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Result<T, CommandError> {
    raw.trim().parse::<T>()
        .map_err(|_| CommandError::input(format!("ожидалось число, получено: {:?}", raw).as_str()))
}

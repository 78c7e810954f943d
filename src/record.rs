use csv::StringRecord;
use derive_more::{Deref, DerefMut};
use itertools::Itertools;

use crate::{Error, Result, MIN_FIELDS};

const CATEGORY_FIELD: usize = 2;
const TAGS_FIELD: usize = 3;
const SOLVED_FIELD: usize = 4;

/// Parameters for reading delimited record text.
#[derive(Copy, Clone, Debug)]
pub struct ReadOptions {
    pub delimiter: u8,
    /// Quote character for fields that contain the delimiter.
    pub quote: u8,
    /// Drop rows with too few fields instead of failing the whole read.
    pub skip_malformed: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            delimiter: b',',
            quote: b'|',
            skip_malformed: false,
        }
    }
}

/// Ordered tag tokens of a record.
///
/// The source field is split at every single space, so runs of spaces and
/// an empty field produce empty tokens. These count as tags like any other.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deref, DerefMut)]
pub struct Tags(pub Vec<String>);

impl Tags {
    pub fn parse(field: &str) -> Self {
        Tags(field.split(' ').map(str::to_owned).collect())
    }
}

impl std::fmt::Display for Tags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// One item row of the input.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Record {
    pub category: String,
    pub tags: Tags,
    pub solved: bool,
}

impl Record {
    pub fn new(
        category: impl Into<String>,
        tags: impl AsRef<str>,
        solved: bool,
    ) -> Self {
        Record {
            category: category.into(),
            tags: Tags::parse(tags.as_ref()),
            solved,
        }
    }
}

impl TryFrom<&StringRecord> for Record {
    type Error = Error;

    fn try_from(row: &StringRecord) -> Result<Self> {
        if row.len() < MIN_FIELDS {
            return Err(Error::MalformedRecord {
                line: row.position().map_or(0, |p| p.line()),
                fields: row.len(),
            });
        }

        Ok(Record {
            category: row[CATEGORY_FIELD].to_owned(),
            tags: Tags::parse(&row[TAGS_FIELD]),
            solved: !row[SOLVED_FIELD].is_empty(),
        })
    }
}

/// Parse all records from delimited text.
pub fn read_records(text: &str, options: &ReadOptions) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .quote(options.quote)
        .from_reader(text.as_bytes());

    let mut ret = Vec::new();
    for row in rdr.records() {
        match Record::try_from(&row?) {
            Ok(record) => {
                log::trace!(
                    "read_records: {:?} [{}] solved: {}",
                    record.category,
                    record.tags,
                    record.solved
                );
                ret.push(record);
            }
            Err(e @ Error::MalformedRecord { .. })
                if options.skip_malformed =>
            {
                log::warn!("read_records: skipping row, {e}");
            }
            Err(e) => return Err(e),
        }
    }

    log::debug!("read_records: parsed {} records", ret.len());
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Tags::parse("tagX"), Tags(vec!["tagX".into()]));
        assert_eq!(
            Tags::parse("tagX tagY"),
            Tags(vec!["tagX".into(), "tagY".into()])
        );
        assert_eq!(
            Tags::parse("a  b"),
            Tags(vec!["a".into(), "".into(), "b".into()])
        );
        assert_eq!(Tags::parse(""), Tags(vec!["".into()]));
        assert_eq!(Tags::parse("tagX tagY").to_string(), "tagX tagY");
    }

    #[test]
    fn test_read_records() {
        let records = read_records(
            "a,b,cat1,tagX,1\nc,d,cat1,tagX tagY,\ne,f,cat2,tagY,done\n",
            &ReadOptions::default(),
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                Record::new("cat1", "tagX", true),
                Record::new("cat1", "tagX tagY", false),
                Record::new("cat2", "tagY", true),
            ]
        );
    }

    #[test]
    fn test_quoted_fields() {
        let records = read_records(
            "|x,y|,b,|cat, one|,tag,yes,extra\n",
            &ReadOptions::default(),
        )
        .unwrap();
        assert_eq!(records, vec![Record::new("cat, one", "tag", true)]);
    }

    #[test]
    fn test_custom_delimiter() {
        let options = ReadOptions {
            delimiter: b';',
            ..Default::default()
        };
        let records = read_records("a;b;cat;t1 t2;\n", &options).unwrap();
        assert_eq!(records, vec![Record::new("cat", "t1 t2", false)]);
    }

    #[test]
    fn test_malformed() {
        let text = "a,b,cat1,tagX,1\na,b,cat2\n";

        match read_records(text, &ReadOptions::default()) {
            Err(Error::MalformedRecord { line, fields }) => {
                assert_eq!(line, 2);
                assert_eq!(fields, 3);
            }
            other => panic!("unexpected result {other:?}"),
        }

        let err = read_records(text, &ReadOptions::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("line 2: expected at least {MIN_FIELDS} fields, found 3")
        );

        let options = ReadOptions {
            skip_malformed: true,
            ..Default::default()
        };
        let records = read_records(text, &options).unwrap();
        assert_eq!(records, vec![Record::new("cat1", "tagX", true)]);
    }
}

//! Sample interchange text.

pub const JANE_WORK_EMAIL: &str = "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Jane Doe\r\nEMAIL;TYPE=WORK,PREF=1:jane@example.com\r\nEND:VCARD\r\n";

pub const FOLDED_NOTE: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Folded Note\r\n\
NOTE:This note is long enough that the exporter had to fold it onto a\r\n\
\x20 second line.\r\n\
END:VCARD\r\n";

pub const CELL_PHONE: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Cell Owner\r\n\
TEL;TYPE=CELL:(415) 555-0100\r\n\
END:VCARD\r\n";

pub const HOME_ADDRESS: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Home Owner\r\n\
ADR;TYPE=HOME:;;123 Main St;Springfield;IL;62704;USA\r\n\
END:VCARD\r\n";

pub const TWO_PLAIN_EMAILS: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Two Mails\r\n\
EMAIL:first@example.com\r\n\
EMAIL:second@example.com\r\n\
END:VCARD\r\n";

/// Every facet, with labels and a declared preference.
pub const FULL_PERSON: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Doe;Jane;Q.;Dr.;PhD\r\n\
FN:Dr. Jane Q. Doe\r\n\
NICKNAME:JD,Janie\r\n\
BDAY:1990-01-05\r\n\
ORG:Acme\\, Inc.;Research\r\n\
TITLE:Engineer\r\n\
PHOTO;VALUE=uri:https://example.com/jane.jpg\r\n\
EMAIL;TYPE=WORK,PREF=1:jane@example.com\r\n\
EMAIL;TYPE=HOME:jane.doe@home.example\r\n\
TEL;TYPE=CELL:(415) 555-0100\r\n\
TEL;TYPE=WORK:+49 30 1234567\r\n\
ADR;TYPE=HOME:;;123 Main St;Springfield;IL;62704;USA\r\n\
NOTE:Not carried into envelopes\r\n\
END:VCARD\r\n";

/// Contact points with no `TYPE` at all.
pub const UNLABELED: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:No Labels\r\n\
EMAIL:a@example.com\r\n\
TEL:555-0100\r\n\
ADR:;;1 Road;Town;;;\r\n\
END:VCARD\r\n";

/// Apple-style export with grouped labels.
pub const APPLE_GROUPED: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Appleseed;Johnny;;;\r\n\
FN:Johnny Appleseed\r\n\
item1.TEL;type=pref:(415) 555-0100\r\n\
item1.X-ABLabel:_$!<Mobile>!$_\r\n\
EMAIL;type=INTERNET;type=HOME;type=pref:johnny@example.com\r\n\
END:VCARD\r\n";

/// Second block is never closed.
pub const UNTERMINATED: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Complete\r\n\
END:VCARD\r\n\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Dangling\r\n";

/// No name at all, only an email.
pub const EMAIL_ONLY: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
EMAIL;TYPE=HOME:solo@example.com\r\n\
UID:solo-1\r\n\
END:VCARD\r\n";

/// Preferences declared, none of them primary.
pub const NO_PRIMARY_EMAILS: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Pref Zero\r\n\
EMAIL;PREF=0:a@example.com\r\n\
EMAIL;PREF=0:b@example.com\r\n\
EMAIL;PREF=0:c@example.com\r\n\
UID:pref-zero\r\n\
END:VCARD\r\n";

/// Linked photo with an image type.
pub const URI_PHOTO: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Linked Photo\r\n\
PHOTO;VALUE=uri;TYPE=JPEG:https://example.com/jane.jpg\r\n\
UID:linked-photo\r\n\
END:VCARD\r\n";

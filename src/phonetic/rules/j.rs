// Consonant rules for J
// Spanish, German and English J

use crate::phonetic::scan::Scan;

pub(super) fn encode_j(s: &mut Scan) {
    if spanish_j(s) || spanish_oj_uj(s) {
        return;
    }
    other_j(s);
}

fn spanish_j(s: &mut Scan) -> bool {
    if (s.at(s.current + 1, 3, &["UAN", "ACI", "ALI", "EFE", "ICA", "IME", "OAQ", "UAR"])
        && !s.at(s.current, 8, &["JIMERSON", "JIMERSEN"]))
        || (s.at(s.current + 1, 3, &["OSE"]) && s.current + 3 == s.last)
        || s.at(s.current + 1, 4, &["EREZ", "UNTA", "AIME", "AVIE", "AVIA"])
        || s.at(s.current + 1, 6, &["IMINEZ", "ARAMIL"])
        || (s.current + 2 == s.last && s.at(s.current - 2, 5, &["MEJIA"]))
        || s.at(s.current - 2, 5, &[
            "TEJED", "TEJAD", "LUJAN", "FAJAR", "BEJAR", "BOJOR", "CAJIG", "DEJAS", "DUJAR",
            "DUJAN", "MIJAR", "MEJOR", "NAJAR", "NOJOS", "RAJED", "RIJAL", "REJON", "TEJAN",
            "UIJAN",
        ])
        || s.at(s.current - 3, 8, &["ALEJANDR", "GUAJARDO", "TRUJILLO"])
        || (s.at(s.current - 2, 5, &["RAJAS"]) && s.current > 2)
        || (s.at(s.current - 2, 5, &["MEJIA"]) && !s.at(s.current - 2, 6, &["MEJIAN"]))
        || s.at(s.current - 1, 5, &["OJEDA"])
        || s.at(s.current - 3, 5, &["LEIJA", "MINJA"])
        || s.at(s.current - 3, 6, &["VIAJES", "GRAJAL"])
        || s.at(s.current, 8, &["JAUREGUI"])
        || s.at(s.current - 4, 8, &["HINOJOSA"])
        || s.at(0, 4, &["SAN "])
        || (s.current + 1 == s.last
            && s.char_at(s.current + 1) == 'O'
            && !(s.at(0, 4, &["TOJO"]) || s.at(0, 5, &["BANJO"]) || s.at(0, 6, &["MARYJO"])))
    {
        if !(s.at(s.current, 4, &["JUAN"]) || s.at(s.current, 4, &["JOAQ"])) {
            s.add("H");
        } else if s.current == 0 {
            s.add("A");
        }

        s.advance(2, 1);
        return true;
    }
    if s.at(s.current + 1, 4, &["ORGE", "ULIO", "ESUS"]) && !s.at(0, 6, &["JORGEN"]) {
        if s.current + 4 == s.last && s.at(s.current + 1, 4, &["ORGE"]) {
            if s.encode_vowels {
                s.add_two("JARJ", "HARHA");
            } else {
                s.add_two("JRJ", "HRH");
            }
            s.advance(5, 5);
            return true;
        }
        s.add_two("J", "H");
        s.advance(2, 1);
        return true;
    }
    false
}

fn german_j(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 2, &["AH"])
        || (s.at(s.current + 1, 5, &["OHANN"]) && s.current + 5 == s.last)
        || (s.at(s.current + 1, 3, &["UNG"]) && !s.at(s.current + 1, 4, &["UNGL"]))
        || s.at(s.current + 1, 3, &["UGO"])
    {
        s.add("A");
        s.advance(2, 1);
        return true;
    }
    false
}

fn spanish_oj_uj(s: &mut Scan) -> bool {
    if s.at(s.current + 1, 5, &["OJOBA", "UJUY "]) {
        if s.encode_vowels {
            s.add("HAH");
        } else {
            s.add("HH");
        }
        s.advance(4, 3);
        return true;
    }
    false
}

fn j_to_j(s: &mut Scan) -> bool {
    if s.is_vowel_at(s.current + 1) {
        if s.current == 0 && j_name_with_alt_y(s) {
            if s.encode_vowels {
                s.add_two("JA", "A");
            } else {
                s.add_two("J", "A");
            }
        } else if s.encode_vowels {
            s.add("JA");
        } else {
            s.add("J");
        }

        s.current += 1;
        s.current = s.skip_vowels(s.current);
        return false;
    } else {
        s.add("J");
        s.current += 1;
        return true;
    }
}

fn spanish_j_2(s: &mut Scan) -> bool {
    if (s.current - 2 == 0
        && s.at(s.current - 2, 4, &["BOJA", "BAJA", "BEJA", "BOJO", "MOJA", "MOJI", "MEJI"]))
        || (s.current - 3 == 0
            && s.at(s.current - 3, 5, &[
                "FRIJO", "BRUJO", "BRUJA", "GRAJE", "GRIJA", "LEIJA", "QUIJA",
            ]))
        || (s.current + 3 == s.last && s.at(s.current - 1, 5, &["AJARA"]))
        || (s.current + 2 == s.last
            && s.at(s.current - 1, 4, &[
                "AJOS", "EJOS", "OJAS", "OJOS", "UJON", "AJOZ", "AJAL", "UJAR", "EJON", "EJAN",
            ]))
        || (s.current + 1 == s.last
            && s.at(s.current - 1, 3, &["OJA", "EJA"])
            && !s.at(0, 4, &["DEJA"]))
    {
        s.add("H");
        s.advance(2, 1);
        return true;
    }
    false
}

fn j_as_vowel(s: &mut Scan) -> bool {
    if s.at(s.current, 5, &["JEWSK"]) {
        s.add_two("J", "");
        return true;
    }
    (s.at(s.current + 1, 1, &["L", "T", "K", "S", "N", "M"]) && !s.at(s.current + 2, 1, &["A"]))
        || s.at(0, 9, &["HALLELUJA", "LJUBLJANA"])
        || s.at(0, 4, &["LJUB", "BJOR"])
        || s.at(0, 5, &["HAJEK"])
        || s.at(0, 3, &["WOJ"])
        || s.at(0, 2, &["FJ"])
        || s.at(s.current, 5, &["JAVIK", "JEVIC"])
        || (s.current + 1 == s.last && s.at(0, 5, &["SONJA", "TANJA", "TONJA"]))
}

fn other_j(s: &mut Scan) {
    if s.current == 0 {
        if !german_j(s) {
            j_to_j(s);
        }
    } else {
        if spanish_j_2(s) {
            return;
        } else if !j_as_vowel(s) {
            s.add("J");
        }
        if s.char_at(s.current + 1) == 'J' {
            s.current += 2;
        } else {
            s.current += 1;
        }
    }
}

fn j_name_with_alt_y(s: &Scan) -> bool {
    s.at(0, 3, &["JAN", "JON", "JAN", "JIN", "JEN"])
        || s.at(0, 4, &[
            "JUHL", "JULY", "JOEL", "JOHN", "JOSH", "JUDE", "JUNE", "JONI", "JULI", "JENA", "JUNG",
            "JINA", "JANA", "JENI", "JOEL", "JANN", "JONA", "JENE", "JULE", "JANI", "JONG", "JOHN",
            "JEAN", "JUNG", "JONE", "JARA", "JUST", "JOST", "JAHN", "JACO", "JANG", "JUDE", "JONE",
        ])
        || s.at(0, 5, &[
            "JOANN", "JANEY", "JANAE", "JOANA", "JUTTA", "JULEE", "JANAY", "JANEE", "JETTA",
            "JOHNA", "JOANE", "JAYNA", "JANES", "JONAS", "JONIE", "JUSTA", "JUNIE", "JUNKO",
            "JENAE", "JULIO", "JINNY", "JOHNS", "JACOB", "JETER", "JAFFE", "JESKE", "JANKE",
            "JAGER", "JANIK", "JANDA", "JOSHI", "JULES", "JANTZ", "JEANS", "JUDAH", "JANUS",
            "JENNY", "JENEE", "JONAH", "JONAS", "JACOB", "JOSUE", "JOSEF", "JULES", "JULIE",
            "JULIA", "JANIE", "JANIS", "JENNA", "JANNA", "JEANA", "JENNI", "JEANE", "JONNA",
        ])
        || s.at(0, 6, &[
            "JORDAN", "JORDON", "JOSEPH", "JOSHUA", "JOSIAH", "JOSPEH", "JUDSON", "JULIAN",
            "JULIUS", "JUNIOR", "JUDITH", "JOESPH", "JOHNIE", "JOANNE", "JEANNE", "JOANNA",
            "JOSEFA", "JULIET", "JANNIE", "JANELL", "JASMIN", "JANINE", "JOHNNY", "JEANIE",
            "JEANNA", "JOHNNA", "JOELLE", "JOVITA", "JOSEPH", "JONNIE", "JANEEN", "JANINA",
            "JOANIE", "JAZMIN", "JOHNIE", "JANENE", "JOHNNY", "JONELL", "JENELL", "JANETT",
            "JANETH", "JENINE", "JOELLA", "JOEANN", "JULIAN", "JOHANA", "JENICE", "JANNET",
            "JANISE", "JULENE", "JOSHUA", "JANEAN", "JAIMEE", "JOETTE", "JANYCE", "JENEVA",
            "JORDAN", "JACOBS", "JENSEN", "JOSEPH", "JANSEN", "JORDON", "JULIAN", "JAEGER",
            "JACOBY", "JENSON", "JARMAN", "JOSLIN", "JESSEN", "JAHNKE", "JACOBO", "JULIEN",
            "JOSHUA", "JEPSON", "JULIUS", "JANSON", "JACOBI", "JUDSON", "JARBOE", "JOHSON",
            "JANZEN", "JETTON", "JUNKER", "JONSON", "JAROSZ", "JENNER", "JAGGER", "JASMIN",
            "JEPSEN", "JORDEN", "JANNEY", "JUHASZ", "JERGEN", "JAKOB",
        ])
        || s.at(0, 7, &[
            "JOHNSON", "JOHNNIE", "JASMINE", "JEANNIE", "JOHANNA", "JANELLE", "JANETTE", "JULIANA",
            "JUSTINA", "JOSETTE", "JOELLEN", "JENELLE", "JULIETA", "JULIANN", "JULISSA", "JENETTE",
            "JANETTA", "JOSELYN", "JONELLE", "JESENIA", "JANESSA", "JAZMINE", "JEANENE", "JOANNIE",
            "JADWIGA", "JOLANDA", "JULIANE", "JANUARY", "JEANICE", "JANELLA", "JEANETT", "JENNINE",
            "JOHANNE", "JOHNSIE", "JANIECE", "JOHNSON", "JENNELL", "JAMISON", "JANSSEN", "JOHNSEN",
            "JARDINE", "JAGGERS", "JURGENS", "JOURDAN", "JULIANO", "JOSEPHS", "JHONSON", "JOZWIAK",
            "JANICKI", "JELINEK", "JANSSON", "JOACHIM", "JANELLE", "JACOBUS", "JENNING", "JANTZEN",
            "JOHNNIE",
        ])
        || s.at(0, 8, &[
            "JOSEFINA", "JEANNINE", "JULIANNE", "JULIANNA", "JONATHAN", "JONATHON", "JEANETTE",
            "JANNETTE", "JEANETTA", "JOHNETTA", "JENNEFER", "JULIENNE", "JOSPHINE", "JEANELLE",
            "JOHNETTE", "JULIEANN", "JOSEFINE", "JULIETTA", "JOHNSTON", "JACOBSON", "JACOBSEN",
            "JOHANSEN", "JOHANSON", "JAWORSKI", "JENNETTE", "JELLISON", "JOHANNES", "JASINSKI",
            "JUERGENS", "JARNAGIN", "JEREMIAH", "JEPPESEN", "JARNIGAN", "JANOUSEK",
        ])
        || s.at(0, 9, &[
            "JOHNATHAN", "JOHNATHON", "JORGENSEN", "JEANMARIE", "JOSEPHINA", "JEANNETTE",
            "JOSEPHINE", "JEANNETTA", "JORGENSON", "JANKOWSKI", "JOHNSTONE", "JABLONSKI",
            "JOSEPHSON", "JOHANNSEN", "JURGENSEN", "JIMMERSON", "JOHANSSON",
        ])
        || s.at(0, 10, &["JAKUBOWSKI"])
}

// Consonant rules for W
// Silent W, WR and Slavic -WICZ/-WITZ names

use crate::phonetic::scan::{Rule, Scan};

const W_RULES: &[Rule] = &[
    silent_w_at_beginning,
    witz_wicz,
    wr,
    initial_w_vowel,
    wh,
    eastern_european_w,
];

pub(super) fn encode_w(s: &mut Scan) {
    if s.first_match(W_RULES) {
        return;
    }
    if s.encode_vowels && s.at(s.current, 2, &["WE"]) && s.current + 1 == s.last {
        s.add("A");
    }
    s.current += 1;
}

fn silent_w_at_beginning(s: &mut Scan) -> bool {
    if s.current == 0 && s.at(s.current, 2, &["WR"]) {
        s.current += 1;
        return true;
    }
    false
}

fn witz_wicz(s: &mut Scan) -> bool {
    if s.current + 3 == s.last && s.at(s.current, 4, &["WICZ", "WITZ"]) {
        if s.encode_vowels {
            if s.primary.ends_with('A') {
                s.add_two("TS", "FAX");
            } else {
                s.add_two("ATS", "FAX");
            }
        } else {
            s.add_two("TS", "FX");
        }
        s.current += 4;
        return true;
    }
    false
}

fn wr(s: &mut Scan) -> bool {
    if s.at(s.current, 2, &["WR"]) {
        s.add("R");
        s.current += 2;
        return true;
    }
    false
}

fn initial_w_vowel(s: &mut Scan) -> bool {
    if s.current == 0 && s.is_vowel_at(s.current + 1) {
        if germanic_or_slavic_w_name(s) {
            if s.encode_vowels {
                s.add_exact_approx_alt("A", "VA", "A", "FA");
            } else {
                s.add_exact_approx_alt("A", "V", "A", "F");
            }
        } else {
            s.add("A");
        }
        s.current += 1;
        s.current = s.skip_vowels(s.current);
        return true;
    }
    false
}

fn wh(s: &mut Scan) -> bool {
    if s.at(s.current, 2, &["WH"]) {
        if s.char_at(s.current + 2) == 'O'
            && !(s.at(s.current + 2, 4, &["OOSH"])
                || s.at(s.current + 2, 3, &["OOP", "OMP", "ORL", "ORT"])
                || s.at(s.current + 2, 2, &["OA", "OP"]))
        {
            s.add("H");
            s.advance(3, 2);
            return true;
        } else if s.at(s.current + 2, 3, &[
            "IDE", "ARD", "EAD", "AWK", "ERD", "OOK", "AND", "OLE", "OOD",
        ])
            || s.at(s.current + 2, 4, &["EART", "OUSE", "OUND"])
            || s.at(s.current + 2, 5, &["AMMER"])
        {
            s.add("H");
            s.current += 2;
            return true;
        } else if s.current == 0 {
            s.add("A");
            s.current += 2;
            s.current = s.skip_vowels(s.current);
            return true;
        }

        s.current += 2;
        return true;
    }
    false
}

fn eastern_european_w(s: &mut Scan) -> bool {
    if (s.current == s.last && s.is_vowel_at(s.current - 1))
        || s.at(s.current - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || (s.at(s.current, 5, &["WICKI", "WACKI"]) && s.current + 4 == s.last)
        || (s.at(s.current, 4, &["WIAK"]) && s.current + 3 == s.last)
        || s.at(0, 3, &["SCH"])
    {
        s.add_exact_approx_alt("", "V", "", "F");
        s.current += 1;
        return true;
    }
    false
}

fn germanic_or_slavic_w_name(s: &Scan) -> bool {
    s.at(0, 3, &["WEE", "WIX", "WAX"])
        || s.at(0, 4, &[
            "WOLF", "WEIS", "WAHL", "WALZ", "WEIL", "WERT", "WINE", "WILK", "WALT", "WOLL", "WADA",
            "WULF", "WEHR", "WURM", "WYSE", "WENZ", "WIRT", "WOLK", "WEIN", "WYSS", "WASS", "WANN",
            "WINT", "WINK", "WILE", "WIKE", "WIER", "WELK", "WISE",
        ])
        || s.at(0, 5, &[
            "WIRTH", "WIESE", "WITTE", "WENTZ", "WOLFF", "WENDT", "WERTZ", "WILKE", "WALTZ",
            "WEISE", "WOOLF", "WERTH", "WEESE", "WURTH", "WINES", "WARGO", "WIMER", "WISER",
            "WAGER", "WILLE", "WILDS", "WAGAR", "WERTS", "WITTY", "WIENS", "WIEBE", "WIRTZ",
            "WYMER", "WULFF", "WIBLE", "WINER", "WIEST", "WALKO", "WALLA", "WEBRE", "WEYER",
            "WYBLE", "WOMAC", "WILTZ", "WURST", "WOLAK", "WELKE", "WEDEL", "WEIST", "WYGAN",
            "WUEST", "WEISZ", "WALCK", "WEITZ", "WYDRA", "WANDA", "WILMA", "WEBER",
        ])
        || s.at(0, 6, &[
            "WETZEL", "WEINER", "WENZEL", "WESTER", "WALLEN", "WENGER", "WALLIN", "WEILER",
            "WIMMER", "WEIMER", "WYRICK", "WEGNER", "WINNER", "WESSEL", "WILKIE", "WEIGEL",
            "WOJCIK", "WENDEL", "WITTER", "WIENER", "WEISER", "WEXLER", "WACKER", "WISNER",
            "WITMER", "WINKLE", "WELTER", "WIDMER", "WITTEN", "WINDLE", "WASHER", "WOLTER",
            "WILKEY", "WIDNER", "WARMAN", "WEYANT", "WEIBEL", "WANNER", "WILKEN", "WILTSE",
            "WARNKE", "WALSER", "WEIKEL", "WESNER", "WITZEL", "WROBEL", "WAGNON", "WINANS",
            "WENNER", "WOLKEN", "WILNER", "WYSONG", "WYCOFF", "WUNDER", "WINKEL", "WIDMAN",
            "WELSCH", "WEHNER", "WEIGLE", "WETTER", "WUNSCH", "WHITTY", "WAXMAN", "WILKER",
            "WILHAM", "WITTIG", "WITMAN", "WESTRA", "WEHRLE", "WASSER", "WILLER", "WEGMAN",
            "WARFEL", "WYNTER", "WERNER", "WAGNER", "WISSER",
        ])
        || s.at(0, 7, &[
            "WISEMAN", "WINKLER", "WILHELM", "WELLMAN", "WAMPLER", "WACHTER", "WALTHER", "WYCKOFF",
            "WEIDNER", "WOZNIAK", "WEILAND", "WILFONG", "WIEGAND", "WILCHER", "WIELAND", "WILDMAN",
            "WALDMAN", "WORTMAN", "WYSOCKI", "WEIDMAN", "WITTMAN", "WIDENER", "WOLFSON", "WENDELL",
            "WEITZEL", "WILLMAN", "WALDRUP", "WALTMAN", "WALCZAK", "WEIGAND", "WESSELS", "WIDEMAN",
            "WOLTERS", "WIREMAN", "WILHOIT", "WEGENER", "WOTRING", "WINGERT", "WIESNER", "WAYMIRE",
            "WHETZEL", "WENTZEL", "WINEGAR", "WESTMAN", "WYNKOOP", "WALLICK", "WURSTER", "WINBUSH",
            "WILBERT", "WALLACH", "WYNKOOP", "WALLICK", "WURSTER", "WINBUSH", "WILBERT", "WALLACH",
            "WEISSER", "WEISNER", "WINDERS", "WILLMON", "WILLEMS", "WIERSMA", "WACHTEL", "WARNICK",
            "WEIDLER", "WALTRIP", "WHETSEL", "WHELESS", "WELCHER", "WALBORN", "WILLSEY", "WEINMAN",
            "WAGAMAN", "WOMMACK", "WINGLER", "WINKLES", "WIEDMAN", "WHITNER", "WOLFRAM", "WARLICK",
            "WEEDMAN", "WHISMAN", "WINLAND", "WEESNER", "WARTHEN", "WETZLER", "WENDLER", "WALLNER",
            "WOLBERT", "WITTMER", "WISHART", "WILLIAM",
        ])
        || s.at(0, 8, &[
            "WESTPHAL", "WICKLUND", "WEISSMAN", "WESTLUND", "WOLFGANG", "WILLHITE", "WEISBERG",
            "WALRAVEN", "WOLFGRAM", "WILHOITE", "WECHSLER", "WENDLING", "WESTBERG", "WENDLAND",
            "WININGER", "WHISNANT", "WESTRICK", "WESTLING", "WESTBURY", "WEITZMAN", "WEHMEYER",
            "WEINMANN", "WISNESKI", "WHELCHEL", "WEISHAAR", "WAGGENER", "WALDROUP", "WESTHOFF",
            "WIEDEMAN", "WASINGER", "WINBORNE",
        ])
        || s.at(0, 9, &[
            "WHISENANT", "WEINSTEIN", "WESTERMAN", "WASSERMAN", "WITKOWSKI", "WEINTRAUB",
            "WINKELMAN", "WINKFIELD", "WANAMAKER", "WIECZOREK", "WIECHMANN", "WOJTOWICZ",
            "WALKOWIAK", "WEINSTOCK", "WILLEFORD", "WARKENTIN", "WEISINGER", "WINKLEMAN",
            "WILHEMINA",
        ])
        || s.at(0, 10, &[
            "WISNIEWSKI", "WUNDERLICH", "WHISENHUNT", "WEINBERGER", "WROBLEWSKI", "WAGUESPACK",
            "WEISGERBER", "WESTERVELT", "WESTERLUND", "WASILEWSKI", "WILDERMUTH", "WESTENDORF",
            "WESOLOWSKI", "WEINGARTEN", "WINEBARGER", "WESTERBERG", "WANNAMAKER", "WEISSINGER",
        ])
        || s.at(0, 11, &["WALDSCHMIDT", "WEINGARTNER", "WINEBRENNER"])
        || s.at(0, 12, &["WOLFENBARGER"])
        || s.at(0, 13, &["WOJCIECHOWSKI"])
}
